use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn names_path(&self) -> &str;
    fn exclusions_path(&self) -> Option<&str>;
    fn last_year_path(&self) -> Option<&str>;
    fn max_attempts(&self) -> usize;
    fn save_to(&self) -> Option<&str>;
}
