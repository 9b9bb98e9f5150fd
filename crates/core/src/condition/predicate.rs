// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closure-backed condition for host-supplied predicates

use super::{EvaluationContext, EventCondition};
use crate::definition::{ConditionRef, EventDefinition};

/// Wraps any stateless predicate as a condition plugin
pub struct PredicateCondition<F> {
    predicate: F,
}

impl<F> PredicateCondition<F> {
    pub fn new(predicate: F) -> Self
    where
        F: Fn(&EventDefinition, &ConditionRef, &EvaluationContext<'_>) -> bool + Send + Sync,
    {
        Self { predicate }
    }
}

impl<F> EventCondition for PredicateCondition<F>
where
    F: Fn(&EventDefinition, &ConditionRef, &EvaluationContext<'_>) -> bool + Send + Sync,
{
    fn is_met(
        &self,
        definition: &EventDefinition,
        condition: &ConditionRef,
        context: &EvaluationContext<'_>,
    ) -> bool {
        (self.predicate)(definition, condition, context)
    }
}
