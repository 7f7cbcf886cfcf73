//! AggregateStep (Transform): construye el `AggregateDocument`.

use caitao_core::transform_step;
use caitao_providers::AggregateDocument;

use crate::artifacts::{DocumentArtifact, WorkingSetArtifact};

transform_step! {
    AggregateStep: "aggregate", WorkingSetArtifact => DocumentArtifact,
    |working_set| {
        Ok(DocumentArtifact { document: AggregateDocument::build(&working_set.records) })
    }
}
