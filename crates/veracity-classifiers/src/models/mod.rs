pub mod classifier_trait;
pub mod naive_bayes;
