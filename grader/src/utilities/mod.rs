pub mod answer_normalization;
