//! Structural type synthesizers.
//!
//! The host asks for the return type of every method call whose receiver class
//! has a registered provider. Each synthesizer reads the argument types of a
//! marker construction call and builds the structural type it describes,
//! wrapped in the static-type interface (`Wrapper<T>`).
//!
//! | marker call | registered on |
//! |---|---|
//! | `shape`, `intersection`, `generic` | static-types class |
//! | `optional` | static-type interface |
//!
//! Synthesizers return `None` on any narrowing failure and never report.

mod generic;
mod intersection;
mod optional;
mod shape;

pub use generic::{GenericObjectReturnTypeProvider, generic};
pub use intersection::{IntersectionReturnTypeProvider, intersection};
pub use optional::{OptionalReturnTypeProvider, optional};
pub use shape::{ShapeReturnTypeProvider, shape};

use crate::syntax::MethodReturnTypeEvent;
use tracing::{Level, debug, span};
use typekit_common::ToolkitConfig;
use typekit_solver::Union;

/// Computes the return type of one marker method.
pub trait MethodReturnTypeProvider {
    /// Lower-cased name of the method this provider answers for.
    fn method_name(&self) -> &'static str;

    fn get_method_return_type(&self, event: &MethodReturnTypeEvent<'_>) -> Option<Union>;
}

/// `Wrapper<inner>`.
pub(crate) fn wrap(wrapper: &str, inner: Union) -> Union {
    Union::generic_object(wrapper, [inner])
}

/// Providers keyed by the class they are registered on.
pub struct ReturnTypeProviders {
    providers: Vec<(String, Box<dyn MethodReturnTypeProvider>)>,
}

impl ReturnTypeProviders {
    /// The four synthesizers, registered on the configured classes.
    #[must_use]
    pub fn new(config: &ToolkitConfig) -> Self {
        let wrapper = &config.static_type_interface;
        let static_types = &config.static_types_class;

        let providers: Vec<(String, Box<dyn MethodReturnTypeProvider>)> = vec![
            (
                static_types.clone(),
                Box::new(ShapeReturnTypeProvider::new(wrapper)),
            ),
            (
                static_types.clone(),
                Box::new(IntersectionReturnTypeProvider::new(wrapper)),
            ),
            (
                static_types.clone(),
                Box::new(GenericObjectReturnTypeProvider::new(wrapper)),
            ),
            (
                wrapper.clone(),
                Box::new(OptionalReturnTypeProvider::new(wrapper)),
            ),
        ];
        Self { providers }
    }

    /// Classes the host should consult this plugin for.
    pub fn class_like_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (class, _) in &self.providers {
            if !names.contains(&class.as_str()) {
                names.push(class);
            }
        }
        names
    }

    /// Dispatch on (class, lower-cased method). Class names compare
    /// case-insensitively.
    pub fn get_method_return_type(&self, event: &MethodReturnTypeEvent<'_>) -> Option<Union> {
        let _span = span!(
            Level::TRACE,
            "method_return_type",
            class = event.fq_class_name,
            method = event.method_name_lowercase
        )
        .entered();

        let synthesized = self
            .providers
            .iter()
            .filter(|(class, provider)| {
                class.eq_ignore_ascii_case(event.fq_class_name)
                    && provider
                        .method_name()
                        .eq_ignore_ascii_case(event.method_name_lowercase)
            })
            .find_map(|(_, provider)| provider.get_method_return_type(event));

        if let Some(ty) = &synthesized {
            debug!(ty = %ty, "synthesized marker type");
        }
        synthesized
    }
}

#[cfg(test)]
#[path = "../../tests/synth_tests.rs"]
mod tests;
