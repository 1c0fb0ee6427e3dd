use log::{debug, info, warn};

use crate::{
    describe_error,
    errors::errors::Error,
    evaluator::evaluator::Evaluator,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::{presenter::Presenter, resolver::VariableResolver};

/// What `x / 0` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionPolicy {
    /// Fail with a division by zero evaluation error.
    #[default]
    Reject,
    /// Follow IEEE-754: infinity, or NaN for `0 / 0`.
    NonFinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub division: DivisionPolicy,
}

/// Runs the whole pipeline on `expression`.
///
/// Every stage fails fast: the first lexical, syntax, semantic or
/// evaluation error is returned unchanged.
pub fn calculate(
    expression: &str,
    resolver: &mut dyn VariableResolver,
    config: &EngineConfig,
) -> Result<f64, Error> {
    let tokens = tokenize(expression)?;
    let tree = parse(tokens, resolver)?;
    debug!("evaluating tree of {} nodes", tree.node_count());

    Evaluator::new(config.division).evaluate(&tree)
}

/// Calculator front: owns the presenter and the configuration, takes a
/// resolver per call.
pub struct Engine<P: Presenter> {
    presenter: P,
    config: EngineConfig,
}

impl<P: Presenter> Engine<P> {
    pub fn new(presenter: P, config: EngineConfig) -> Self {
        Engine { presenter, config }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Calculates `expression` and hands the outcome to the presenter.
    ///
    /// The presenter receives either the value or a single rendered error
    /// message, never both.
    pub fn calculate(
        &mut self,
        expression: &str,
        resolver: &mut dyn VariableResolver,
    ) -> Result<f64, Error> {
        let result = calculate(expression, resolver, &self.config);

        match &result {
            Ok(value) => {
                info!("{} = {}", expression.trim(), value);
                self.presenter.show_result(*value);
            }
            Err(error) => {
                warn!("{} failed: {} ({})", expression.trim(), error, error.get_error_name());
                self.presenter.show_error(&describe_error(error, expression));
            }
        }

        result
    }
}
