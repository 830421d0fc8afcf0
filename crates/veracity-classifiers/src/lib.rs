//! veracity-classifiers: a supervised pipeline for fake-news detection.
//!
//! This crate provides the full preprocessing-to-prediction pipeline: text
//! normalization, CSV dataset loading, stratified train/test partitioning,
//! TF-IDF vectorization, a multinomial Naive Bayes model, evaluation
//! metrics, and a batch predictor that persists confidence-scored results.
//!
//! The design favors small, testable modules and explicit fitted-state
//! objects (`FittedVectorizer`, `FittedNaiveBayes`) passed between stages,
//! so fit-before-transform is a type-level precondition rather than a
//! runtime assumption.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod math;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod vectorize;
