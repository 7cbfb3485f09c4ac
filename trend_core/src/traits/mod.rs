pub mod classifier_trait;
