//! FilterWorkingSetStep (Transform)
//!
//! Conserva sólo la cerámica pintada neolítica. Las filas descartadas no
//! llegan a los agregados; su cantidad queda en el artifact.

use caitao_core::transform_step;
use caitao_policies::is_target;
use log::{info, warn};

use crate::artifacts::{ClassifiedArtifact, WorkingSetArtifact};

transform_step! {
    FilterWorkingSetStep: "filter_working_set", ClassifiedArtifact => WorkingSetArtifact,
    |classified| {
        let total = classified.records.len();
        let records: Vec<_> = classified.records.into_iter().filter(|r| is_target(r)).collect();
        let discarded = total - records.len();
        info!("{} piezas de cerámica pintada neolítica de {} en total", records.len(), total);
        if records.is_empty() {
            warn!("ninguna fila pasó el filtro de época y estilo");
        }
        Ok(WorkingSetArtifact { records, discarded })
    }
}
