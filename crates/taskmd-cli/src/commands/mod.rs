//! Pipeline implementations for the two entry points.

mod files;
mod kustomize;

pub use files::generate_from_files;
pub use kustomize::generate_from_kustomize;
