//! caitao-core: motor lineal y determinista que encadena los steps del
//! pipeline.
//!
//! - `artifact`: sobre versionado y hasheado que viaja entre steps.
//! - `step`: `TypedStep` y su vista neutral `Step`.
//! - `engine` / `builder`: ejecución y armado tipado de la cadena.
//! - `event`: bitácora append-only de la ejecución.
//! - `hashing`: JSON canónico y blake3.

pub mod artifact;
pub mod builder;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
mod macros;
pub mod step;

pub use artifact::{Artifact, ArtifactError, ArtifactSpec};
pub use builder::FlowBuilder;
pub use engine::{FlowEngine, ENGINE_VERSION};
pub use errors::CoreEngineError;
pub use event::{Event, EventKind, EventLog};
pub use step::{NoInput, Step, StepKind, TypedStep};
