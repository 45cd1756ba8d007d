pub mod fetcher;
pub mod http;

#[cfg(test)]
pub mod stub;

pub use fetcher::PageFetcher;
pub use http::HttpFetcher;
