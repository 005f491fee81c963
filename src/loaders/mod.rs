pub use self::csv_loader::CsvLoader;

mod csv_loader;
