use crate::error::Result;

/// Core trait for estimators that advance one sub-daily step at a time.
///
/// Defines the interface for components with state carried between steps:
/// initialize state, step, and run over a forcing series.
pub trait StepEstimator {
    const NAME: &'static str;
    type State: Clone;
    type Forcing;
    type Output;
    type Series: SeriesOps<Self::Output>;
    /// Run-constant data: location, configuration.
    type Context;

    /// Create the initial state.
    fn initialize_state(context: &Self::Context) -> Self::State;

    /// Execute one step: given state, forcing and context, return the new
    /// state and the step's output.
    fn step(
        state: &Self::State,
        forcing: &Self::Forcing,
        context: &Self::Context,
    ) -> Result<(Self::State, Self::Output)>;

    /// Run over a forcing series.
    ///
    /// Default implementation: initialize/use provided state, loop over
    /// forcing calling step, stop at the first error. Returns the collected
    /// outputs and the final state.
    fn run(
        forcing: &[Self::Forcing],
        initial_state: Option<&Self::State>,
        context: &Self::Context,
    ) -> Result<(Self::Series, Self::State)> {
        let mut state = match initial_state {
            Some(s) => s.clone(),
            None => Self::initialize_state(context),
        };

        let mut outputs = Self::Series::with_capacity(forcing.len());
        for f in forcing {
            let (new_state, output) = Self::step(&state, f, context)?;
            outputs.push(&output);
            state = new_state;
        }

        Ok((outputs, state))
    }
}

/// Operations required on the series collection type.
pub trait SeriesOps<R> {
    fn with_capacity(n: usize) -> Self;
    fn push(&mut self, record: &R);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Flat array representation of carried state, for bindings and restarts.
pub trait EstimatorState: Sized {
    fn to_vec(&self) -> Vec<f64>;
    fn from_slice(arr: &[f64]) -> Result<Self>;
}
