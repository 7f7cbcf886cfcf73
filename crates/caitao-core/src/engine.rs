//! `FlowEngine`: ejecuta una cadena lineal de steps y deja constancia de
//! cada transición en su `EventLog`.
//!
//! - El avance se deriva siempre de la bitácora (`EventLog::progress`).
//! - Los artifacts se guardan por hash; el siguiente step recibe el output
//!   del anterior.
//! - Un step fallido detiene la ejecución para siempre.
//! - Al terminar el último step se registra el fingerprint de la ejecución,
//!   que depende sólo de la definición y de los hashes de los outputs.

use log::{debug, info, warn};
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

use crate::artifact::{Artifact, ArtifactSpec};
use crate::builder::FlowBuilder;
use crate::errors::CoreEngineError;
use crate::event::{EventKind, EventLog};
use crate::hashing::hash_value;
use crate::step::{Step, StepKind, TypedStep};

/// Versión lógica del motor; cambiarla invalida todos los fingerprints.
pub const ENGINE_VERSION: &str = "caitao-engine/1";

pub struct FlowEngine {
    run_id: Uuid,
    steps: Vec<Box<dyn Step>>,
    definition_hash: String,
    log: EventLog,
    artifacts: HashMap<String, Artifact>,
}

impl FlowEngine {
    /// Empieza a armar un flujo a partir de su step fuente.
    pub fn source<S>(step: S) -> FlowBuilder<S::Output>
        where S: TypedStep + 'static
    {
        FlowBuilder::start(Box::new(step))
    }

    pub(crate) fn from_steps(steps: Vec<Box<dyn Step>>) -> Self {
        let definition_hash = hash_value(&json!(steps.iter().map(|s| s.definition_hash()).collect::<Vec<_>>()));
        Self { run_id: Uuid::new_v4(),
               steps,
               definition_hash,
               log: EventLog::new(),
               artifacts: HashMap::new() }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id()).collect()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Secuencia compacta de eventos, p. ej. `["I", "S", "F", "C"]`.
    pub fn event_codes(&self) -> Vec<&'static str> {
        self.log.codes()
    }

    /// Fingerprint de la ejecución; `None` mientras no haya terminado.
    pub fn fingerprint(&self) -> Option<&str> {
        self.log.fingerprint()
    }

    /// Ejecuta todos los steps pendientes.
    ///
    /// # Errores
    /// El error del primer step que falle, o `RunHalted` si la ejecución ya
    /// había fallado antes.
    pub fn run(&mut self) -> Result<Uuid, CoreEngineError> {
        loop {
            match self.advance() {
                Ok(()) => {}
                Err(CoreEngineError::RunFinished) => return Ok(self.run_id),
                Err(e) => return Err(e),
            }
        }
    }

    /// Ejecuta el próximo step.
    pub fn advance(&mut self) -> Result<(), CoreEngineError> {
        let progress = self.log.progress();
        if progress.failed {
            return Err(CoreEngineError::RunHalted);
        }
        if progress.completed || progress.next >= self.steps.len() {
            return Err(CoreEngineError::RunFinished);
        }
        if !progress.initialized {
            self.log.append(EventKind::Initialized { definition_hash: self.definition_hash.clone(),
                                                     steps: self.steps.len() });
        }

        let index = progress.next;
        let step = self.steps[index].as_ref();
        if index == 0 && step.kind() != StepKind::Source {
            return Err(CoreEngineError::FirstStepMustBeSource);
        }
        let input = match progress.last_artifact.as_deref() {
            None => None,
            Some(hash) => {
                Some(self.artifacts
                         .get(hash)
                         .ok_or_else(|| CoreEngineError::MissingInput { step: step.id().to_string() })?)
            }
        };

        self.log.append(EventKind::StepStarted { index,
                                                 step: step.id().to_string() });
        debug!("[{}] step {} '{}'", self.run_id, index, step.id());

        match step.run(input) {
            Ok(artifact) => {
                let fingerprint = hash_value(&json!({
                    "engine": ENGINE_VERSION,
                    "definition": self.definition_hash,
                    "index": index,
                    "step": step.id(),
                    "artifact": artifact.hash,
                }));
                self.log.append(EventKind::StepFinished { index,
                                                          step: step.id().to_string(),
                                                          artifact: artifact.hash.clone(),
                                                          fingerprint });
                debug!("[{}] '{}' → {} ({})", self.run_id, step.id(), artifact.kind, artifact.hash);
                self.artifacts.insert(artifact.hash.clone(), artifact);
                if index + 1 == self.steps.len() {
                    self.complete();
                }
                Ok(())
            }
            Err(error) => {
                warn!("[{}] '{}' falló: {}", self.run_id, step.id(), error);
                self.log.append(EventKind::StepFailed { index,
                                                        step: step.id().to_string(),
                                                        error: error.clone() });
                Err(error)
            }
        }
    }

    fn complete(&mut self) {
        let fingerprint = hash_value(&json!({
            "engine": ENGINE_VERSION,
            "definition": self.definition_hash,
            "steps": self.log.step_fingerprints(),
        }));
        info!("[{}] ejecución completa en {} ms", self.run_id, self.log.elapsed().num_milliseconds());
        self.log.append(EventKind::Completed { fingerprint });
    }

    /// Output decodificado del step `step`.
    ///
    /// # Errores
    /// `Internal` si el step no terminó; `ArtifactDecode` si su output no
    /// es un `T`.
    pub fn output<T: ArtifactSpec>(&self, step: &str) -> Result<T, CoreEngineError> {
        let artifact = self.log
                           .artifact_of(step)
                           .and_then(|hash| self.artifacts.get(hash))
                           .ok_or_else(|| CoreEngineError::Internal(format!("el step '{step}' no tiene output")))?;
        T::decode(artifact).map_err(|e| CoreEngineError::ArtifactDecode { step: step.to_string(),
                                                                         reason: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::NoInput;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Names {
        names: Vec<String>,
    }

    impl ArtifactSpec for Names {
        const KIND: &'static str = "names";
    }

    #[derive(Debug)]
    struct NamesSource(Vec<&'static str>);

    impl TypedStep for NamesSource {
        type Input = NoInput;
        type Output = Names;
        type Params = Vec<&'static str>;

        fn id(&self) -> &'static str {
            "names"
        }
        fn kind(&self) -> StepKind {
            StepKind::Source
        }
        fn params(&self) -> Self::Params {
            self.0.clone()
        }
        fn execute(&self, _input: Option<NoInput>) -> Result<Names, CoreEngineError> {
            Ok(Names { names: self.0.iter().map(|s| s.to_string()).collect() })
        }
    }

    crate::transform_step! {
        /// Conserva los nombres con `彩`.
        KeepPainted: "keep_painted", Names => Names,
        |input| {
            Ok(Names { names: input.names.into_iter().filter(|n| n.contains('彩')).collect() })
        }
    }

    crate::transform_step! {
        RejectEmpty: "reject_empty", Names => Names,
        |input| {
            if input.names.is_empty() {
                return Err(CoreEngineError::Internal("sin nombres".into()));
            }
            Ok(input)
        }
    }

    fn engine(names: Vec<&'static str>) -> FlowEngine {
        FlowEngine::source(NamesSource(names)).then(KeepPainted::new())
                                              .then(RejectEmpty::new())
                                              .build()
    }

    #[test]
    fn run_emits_full_event_sequence() {
        let mut e = engine(vec!["彩陶罐", "黑陶杯"]);
        let run_id = e.run().expect("run ok");
        assert_eq!(run_id, e.run_id());
        assert_eq!(e.event_codes(), vec!["I", "S", "F", "S", "F", "S", "F", "C"]);
        assert!(e.fingerprint().is_some());
        let kept: Names = e.output("keep_painted").unwrap();
        assert_eq!(kept.names, vec!["彩陶罐"]);
        assert_eq!(e.step_ids(), vec!["names", "keep_painted", "reject_empty"]);
    }

    #[test]
    fn advance_one_step_at_a_time() {
        let mut e = engine(vec!["彩陶壶"]);
        assert!(e.advance().is_ok());
        assert_eq!(e.event_codes(), vec!["I", "S", "F"]);
        assert!(e.output::<Names>("keep_painted").is_err());
        assert!(e.advance().is_ok());
        assert!(e.advance().is_ok());
        assert_eq!(e.advance(), Err(CoreEngineError::RunFinished));
        assert_eq!(e.run(), Ok(e.run_id()));
    }

    #[test]
    fn failure_halts_the_run() {
        let mut e = engine(vec!["黑陶杯"]);
        assert_eq!(e.run(), Err(CoreEngineError::Internal("sin nombres".into())));
        assert_eq!(e.event_codes(), vec!["I", "S", "F", "S", "F", "S", "X"]);
        assert_eq!(e.advance(), Err(CoreEngineError::RunHalted));
        assert!(e.fingerprint().is_none());
        assert!(e.output::<Names>("reject_empty").is_err());
    }

    #[test]
    fn first_step_must_be_a_source() {
        let mut e = FlowEngine::from_steps(vec![Box::new(KeepPainted::new())]);
        assert_eq!(e.run(), Err(CoreEngineError::FirstStepMustBeSource));
        assert_eq!(e.event_codes(), vec!["I"]);
    }

    #[test]
    fn wrong_output_type_is_decode_error() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Other {
            n: u32,
        }
        impl ArtifactSpec for Other {
            const KIND: &'static str = "other";
        }
        let mut e = engine(vec!["彩陶盆"]);
        e.run().unwrap();
        assert!(matches!(e.output::<Other>("names"), Err(CoreEngineError::ArtifactDecode { .. })));
    }

    #[test]
    fn fingerprint_depends_on_data_not_on_run() {
        let mut a = engine(vec!["彩陶罐", "彩陶壶"]);
        let mut b = engine(vec!["彩陶罐", "彩陶壶"]);
        let mut c = engine(vec!["彩陶壶", "彩陶罐"]);
        a.run().unwrap();
        b.run().unwrap();
        c.run().unwrap();
        assert_ne!(a.run_id(), b.run_id());
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
