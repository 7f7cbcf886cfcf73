//! Bitácora de eventos de una ejecución.
//!
//! Cada transición del motor se agrega a un `EventLog` append-only. El
//! avance de la ejecución (`Progress`) se recalcula siempre a partir de la
//! bitácora, nunca de estado mutable aparte.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreEngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Abre la bitácora con el hash de la definición y su cantidad de steps.
    Initialized { definition_hash: String, steps: usize },
    StepStarted { index: usize, step: String },
    /// `artifact` es el hash del único output del step.
    StepFinished {
        index: usize,
        step: String,
        artifact: String,
        fingerprint: String,
    },
    /// Terminal: nada más se ejecuta después.
    StepFailed {
        index: usize,
        step: String,
        error: CoreEngineError,
    },
    Completed { fingerprint: String },
}

impl EventKind {
    /// Letra del evento: I, S, F, X o C.
    pub fn code(&self) -> &'static str {
        match self {
            EventKind::Initialized { .. } => "I",
            EventKind::StepStarted { .. } => "S",
            EventKind::StepFinished { .. } => "F",
            EventKind::StepFailed { .. } => "X",
            EventKind::Completed { .. } => "C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub seq: u64,
    pub kind: EventKind,
    /// No participa de ningún fingerprint.
    pub at: DateTime<Utc>,
}

/// Estado derivado de la bitácora.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Progress {
    pub initialized: bool,
    /// Índice del próximo step a ejecutar.
    pub next: usize,
    /// Hash del output del último step terminado.
    pub last_artifact: Option<String>,
    pub failed: bool,
    pub completed: bool,
}

#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, kind: EventKind) -> &Event {
        let seq = self.events.len() as u64;
        self.events.push(Event { seq, kind, at: Utc::now() });
        &self.events[self.events.len() - 1]
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.kind.code()).collect()
    }

    /// Recorre la bitácora y resume dónde quedó la ejecución.
    pub fn progress(&self) -> Progress {
        self.events.iter().fold(Progress::default(), |mut p, e| {
                              match &e.kind {
                                  EventKind::Initialized { .. } => p.initialized = true,
                                  EventKind::StepStarted { .. } => {}
                                  EventKind::StepFinished { index, artifact, .. } => {
                                      p.next = index + 1;
                                      p.last_artifact = Some(artifact.clone());
                                  }
                                  EventKind::StepFailed { .. } => p.failed = true,
                                  EventKind::Completed { .. } => p.completed = true,
                              }
                              p
                          })
    }

    /// Fingerprints de los steps terminados, en orden.
    pub fn step_fingerprints(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match &e.kind {
                EventKind::StepFinished { fingerprint, .. } => Some(fingerprint.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Hash del output del step `step`, si terminó.
    pub fn artifact_of(&self, step: &str) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match &e.kind {
                                    EventKind::StepFinished { step: s, artifact, .. } if s == step => Some(artifact.as_str()),
                                    _ => None,
                                })
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match &e.kind {
                                    EventKind::Completed { fingerprint } => Some(fingerprint.as_str()),
                                    _ => None,
                                })
    }

    /// Tiempo entre el primer y el último evento.
    pub fn elapsed(&self) -> Duration {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => last.at - first.at,
            _ => Duration::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(index: usize, step: &str) -> EventKind {
        EventKind::StepFinished { index,
                                  step: step.into(),
                                  artifact: format!("h{index}"),
                                  fingerprint: format!("fp{index}") }
    }

    #[test]
    fn seq_follows_append_order() {
        let mut log = EventLog::new();
        log.append(EventKind::Initialized { definition_hash: "d".into(),
                                            steps: 2 });
        let ev = log.append(EventKind::StepStarted { index: 0,
                                                     step: "acquire_records".into() });
        assert_eq!(ev.seq, 1);
        assert_eq!(log.codes(), vec!["I", "S"]);
        assert!(log.elapsed() >= Duration::zero());
    }

    #[test]
    fn progress_tracks_last_finished_step() {
        let mut log = EventLog::new();
        assert_eq!(log.progress(), Progress::default());
        log.append(EventKind::Initialized { definition_hash: "d".into(),
                                            steps: 3 });
        log.append(EventKind::StepStarted { index: 0, step: "a".into() });
        log.append(finished(0, "a"));
        log.append(EventKind::StepStarted { index: 1, step: "b".into() });
        log.append(finished(1, "b"));
        let p = log.progress();
        assert_eq!(p.next, 2);
        assert_eq!(p.last_artifact.as_deref(), Some("h1"));
        assert!(!p.failed && !p.completed);
        assert_eq!(log.artifact_of("a"), Some("h0"));
        assert_eq!(log.step_fingerprints(), vec!["fp0", "fp1"]);
        assert_eq!(log.fingerprint(), None);
    }

    #[test]
    fn failure_is_sticky() {
        let mut log = EventLog::new();
        log.append(EventKind::StepStarted { index: 0, step: "a".into() });
        log.append(EventKind::StepFailed { index: 0,
                                           step: "a".into(),
                                           error: CoreEngineError::Internal("x".into()) });
        let p = log.progress();
        assert!(p.failed);
        assert_eq!(p.next, 0);
        assert_eq!(log.artifact_of("a"), None);
    }
}
