//! Property-based tests for the classifier and generator.

mod classifier_props;
mod generator_props;
