use crate::adapters::{output, parse_exclusions, parse_last_year, parse_names};
use crate::core::assigner::Assigner;
use crate::core::{Assignment, ConfigProvider, Exclusions, Participants, Storage};
use crate::utils::error::{Result, SantaError};
use rand::Rng;

/// 串起整個流程：讀檔 -> 解析名單與排除 -> 抽籤 -> (選用) 儲存結果
pub struct SantaEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SantaEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_text(&self, path: &str) -> Result<String> {
        let data = self.storage.read_file(path).await?;
        String::from_utf8(data).map_err(|_| SantaError::InvalidEncoding {
            path: path.to_string(),
        })
    }

    pub async fn load_participants(&self) -> Result<Participants> {
        let path = self.config.names_path();
        let content = self.read_text(path).await?;
        let participants = parse_names(path, &content)?;
        tracing::info!("👥 Loaded {} participants from {}", participants.len(), path);
        Ok(participants)
    }

    /// 合併排除檔與去年結果兩個來源
    pub async fn load_exclusions(&self, participants: &Participants) -> Result<Exclusions<String>> {
        let mut exclusions = Exclusions::new();

        if let Some(path) = self.config.exclusions_path() {
            let content = self.read_text(path).await?;
            exclusions.merge(parse_exclusions(path, &content, participants)?);
        }

        if let Some(path) = self.config.last_year_path() {
            let content = self.read_text(path).await?;
            exclusions.merge(parse_last_year(path, &content, participants)?);
        }

        tracing::info!("🚫 {} exclusion(s) in effect", exclusions.len());
        Ok(exclusions)
    }

    pub async fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Assignment<String>> {
        let participants = self.load_participants().await?;
        let exclusions = self.load_exclusions(&participants).await?;

        let assigner = Assigner::new(self.config.max_attempts());
        let assignment = assigner.assign(&participants.to_vec(), &exclusions, rng)?;
        tracing::info!("🎁 Assigned {} givers", assignment.len());

        Ok(assignment)
    }

    /// 若有設定 save_to，以文字格式寫出結果，回傳寫入的路徑
    pub async fn save(&self, assignment: &Assignment<String>) -> Result<Option<String>> {
        let Some(path) = self.config.save_to() else {
            return Ok(None);
        };

        let text = output::render_text(assignment);
        self.storage.write_file(path, text.as_bytes()).await?;
        tracing::info!("📁 Results saved to {}", path);

        Ok(Some(path.to_string()))
    }
}
