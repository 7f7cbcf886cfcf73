//! ClassifyRecordsStep (Transform): región y forma para cada fila.

use caitao_core::transform_step;
use caitao_policies::classify;

use crate::artifacts::{ClassifiedArtifact, RecordsArtifact};

transform_step! {
    ClassifyRecordsStep: "classify_records", RecordsArtifact => ClassifiedArtifact,
    |rows| {
        Ok(ClassifiedArtifact { records: rows.records.into_iter().map(classify).collect() })
    }
}
