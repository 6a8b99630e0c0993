//! Parameter set assembly

use tracing::{debug, info};

use crate::domain::entities::{ParameterSet, ParameterTemplate};
use crate::error::DeployResult;

use super::resolver::{ParameterResolver, ResolutionContext};

/// Resolves every parameter of a template, in declaration order.
pub struct ParameterSetBuilder<'a> {
    resolver: ParameterResolver<'a>,
}

impl<'a> ParameterSetBuilder<'a> {
    pub fn new(resolver: ParameterResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Build the full set, or `None` as soon as any parameter is abandoned.
    ///
    /// Nothing resolved before the abandonment is returned.
    pub fn build(
        &self,
        template: &ParameterTemplate,
        ctx: &ResolutionContext,
    ) -> DeployResult<Option<ParameterSet>> {
        let mut parameters = ParameterSet::new();

        for (key, entry) in template {
            match self.resolver.resolve_value(key, entry, ctx)? {
                Some(value) => parameters.insert(key.as_str(), value),
                None => {
                    debug!(key = key.as_str(), resolved = parameters.len(), "parameter set abandoned");
                    return Ok(None);
                }
            }
        }

        info!(count = parameters.len(), "parameters resolved");
        Ok(Some(parameters))
    }
}
