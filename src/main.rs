//! Binary entry point for the dataset mirror.

fn main() {
    dataset_mirror::run();
}
