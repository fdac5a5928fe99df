//! Export adapters. CSV formatting and the file-system sink.

pub mod csv_utils;
pub mod fs_exporter;

pub use csv_utils::{CsvQuoting, contacts_to_csv, export_file_name};
pub use fs_exporter::FsExporter;
