use snafu::prelude::*;
use tracing::{debug, trace};

use crate::container::resolver::{DependencyNotFoundSnafu, ResolveError, Resolver};
use crate::inject::{Injectable, InjectionPoint, Policy, Tag};

pub(super) fn ensure<R, C>(resolver: &R, consumer: &mut C) -> Result<(), ResolveError>
where
    R: Resolver + ?Sized,
    C: Injectable + ?Sized,
{
    for point in consumer.injection_points() {
        let field = point.field();
        let Some(tag) = point.tag() else {
            trace!(
                field,
                annotation = point.annotation(),
                "skipping field without injection annotation"
            );
            continue;
        };

        inject(resolver, point, tag).inspect_err(|err| {
            debug!(field, binding = tag.name(), error = %err, "injection aborted");
        })?;
    }
    Ok(())
}

fn inject<R>(resolver: &R, point: InjectionPoint<'_>, tag: Tag<'_>) -> Result<(), ResolveError>
where
    R: Resolver + ?Sized,
{
    trace!(
        field = point.field(),
        binding = tag.name(),
        policy = %tag.policy(),
        "resolving injection point"
    );

    let resolved = match tag.policy() {
        Policy::Singleton => resolver.dyn_lookup_singleton(tag.name()),
        Policy::Prototype => resolver.dyn_invoke_factory(tag.name())?,
    };
    let object = resolved.context(DependencyNotFoundSnafu { name: tag.name() })?;

    let field = point.field();
    let expected = point.expected_type();
    point
        .assign(object)
        .map_err(|rejected| ResolveError::TypeMismatch {
            name: tag.name().to_owned(),
            field: Some(field),
            expected,
            found: (*rejected).type_name(),
        })
}
