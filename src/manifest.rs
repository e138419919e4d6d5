//! Deployment manifest and operator instructions.
//!
//! The compose file is a constant: a `codesearch` backend serving
//! `/data/livegrep.idx` over gRPC on port 9898 and the `livegrep` web
//! frontend on port 8910, joined by the `livegrep` network. The directory
//! holding the compose file is mounted at `/data`, which is why both output
//! files are written into the scanned root.

use std::path::Path;

/// File name of the generated index configuration.
pub const CONFIG_FILE_NAME: &str = "livegrep.json";

/// File name of the deployment manifest.
pub const COMPOSE_FILE_NAME: &str = "docker-compose.yaml";

/// File name of the index built by `codesearch -dump_index`.
pub const INDEX_FILE_NAME: &str = "livegrep.idx";

/// docker-compose manifest for the livegrep backend and frontend.
pub const DOCKER_COMPOSE: &str = r#"version: "3.3"
services:
  livegrep-backend-linux:
    image: "docker.io/livegrep/base:latest"
    command:
      - "/livegrep/bin/codesearch"
      - "-grpc=0.0.0.0:9898"
      - "-load_index=/data/livegrep.idx"
    ports:
      - "9898:9898"
    volumes:
      - .:/data
    restart: unless-stopped
    networks:
      - livegrep

  livegrep-frontend:
    image: "docker.io/livegrep/base:latest"
    command:
      - "/livegrep/bin/livegrep"
      - "-docroot"
      - "/livegrep/web/"
      - "-connect"
      - "livegrep-backend-linux:9898"
      - "-listen"
      - "0.0.0.0:8910"
    ports:
      - "8910:8910"
    restart: unless-stopped
    networks:
      - livegrep

networks:
  livegrep:
"#;

/// Render the steps an operator runs after generation: build the index with
/// the `livegrep/indexer` image, then start the compose project.
pub fn instructions(root: &Path) -> String {
    let root = root.display();
    format!(
        "To build index at {root}/{INDEX_FILE_NAME}:\n  \
         docker run -v {root}:/data livegrep/indexer /livegrep/bin/codesearch \
         -index_only -dump_index /data/{INDEX_FILE_NAME} /data/{CONFIG_FILE_NAME}\n\
         \n\
         To launch livegrep:\n  \
         docker-compose -f {root}/{COMPOSE_FILE_NAME} up\n"
    )
}
