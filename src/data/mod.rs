pub mod loader;
pub mod splitter;
pub mod minibatch;

pub use loader::{load_complex64, load_pair, write_complex64, SamplePair};
pub use splitter::{complex_divide, merge_complex, split_complex, FeatureSplits};
pub use minibatch::{batch_count, random_mini_batches, MiniBatch};
