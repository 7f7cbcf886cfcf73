/// Declara un step `Transform` sin parámetros.
///
/// ```ignore
/// transform_step! {
///     /// Cuenta las filas.
///     CountStep: "count", Rows => Count,
///     |rows| { Ok(Count { n: rows.items.len() }) }
/// }
/// ```
///
/// El bloque recibe la entrada ya decodificada y devuelve
/// `Result<Output, CoreEngineError>`; admite `?` y `return Err(..)`.
#[macro_export]
macro_rules! transform_step {
    (
        $(#[$meta:meta])*
        $name:ident : $id:literal, $input:ty => $output:ty,
        |$arg:ident| $body:block
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl $name {
            pub fn new() -> Self {
                Self
            }
        }

        impl $crate::step::TypedStep for $name {
            type Input = $input;
            type Output = $output;
            type Params = ();

            fn id(&self) -> &'static str {
                $id
            }

            fn kind(&self) -> $crate::step::StepKind {
                $crate::step::StepKind::Transform
            }

            fn params(&self) -> Self::Params {}

            fn execute(&self, input: Option<$input>) -> Result<$output, $crate::errors::CoreEngineError> {
                let $arg: $input = input.ok_or_else(|| $crate::errors::CoreEngineError::MissingInput { step: $id.to_string() })?;
                $body
            }
        }
    };
}
