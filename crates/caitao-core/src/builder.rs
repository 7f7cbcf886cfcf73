use std::marker::PhantomData;

use crate::artifact::ArtifactSpec;
use crate::engine::FlowEngine;
use crate::step::{Step, TypedStep};

/// Arma la cadena de steps. `Out` es el output del último step agregado;
/// `then` sólo acepta un step cuyo `Input` sea ese mismo tipo, de modo que
/// una cadena mal encajada no compila.
pub struct FlowBuilder<Out> {
    steps: Vec<Box<dyn Step>>,
    _out: PhantomData<fn() -> Out>,
}

impl<Out: ArtifactSpec> FlowBuilder<Out> {
    pub(crate) fn start(source: Box<dyn Step>) -> Self {
        Self { steps: vec![source],
               _out: PhantomData }
    }

    pub fn then<N>(mut self, step: N) -> FlowBuilder<N::Output>
        where N: TypedStep<Input = Out> + 'static
    {
        self.steps.push(Box::new(step));
        FlowBuilder { steps: self.steps,
                      _out: PhantomData }
    }

    pub fn build(self) -> FlowEngine {
        FlowEngine::from_steps(self.steps)
    }
}
