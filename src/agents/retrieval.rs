//! Retrieval responder: chunked corpus, embedding index, best-chunk answers.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::cosine_similarity;
use crate::domain::ports::{Gateway, Responder};

use super::DETERMINISTIC_TEMPERATURE;

/// Chunking parameters for the knowledge corpus.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Chunk window size in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks.
    pub chunk_overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 2000,
            chunk_overlap: 100,
        }
    }
}

impl ChunkConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.chunk_size == 0 {
            return Err(DomainError::InvalidConfig(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::InvalidConfig(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// One corpus chunk with its position in the chunk sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeChunk {
    pub index: usize,
    pub text: String,
}

/// Split a corpus into overlapping character windows.
///
/// All whitespace runs are collapsed to single spaces first. Windows are
/// `chunk_size` characters and consecutive windows share `chunk_overlap`
/// characters; a window that would cut a word short is snapped back to the
/// last space, but only when the snapped end still lies past the overlap
/// region so the walk always advances.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<KnowledgeChunk> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = normalized.chars().collect();

    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() <= config.chunk_size {
        return vec![KnowledgeChunk {
            index: 0,
            text: normalized,
        }];
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while start < chars.len() {
        let mut end = usize::min(start + config.chunk_size, chars.len());

        if end < chars.len() {
            if let Some(offset) = chars[start..end].iter().rposition(|c| *c == ' ') {
                let snapped = start + offset + 1;
                if snapped > start + config.chunk_overlap {
                    end = snapped;
                }
            }
        }

        chunks.push(KnowledgeChunk {
            index,
            text: chars[start..end].iter().collect(),
        });
        index += 1;

        if end == chars.len() {
            break;
        }
        start = end - config.chunk_overlap;
    }

    chunks
}

/// Responder that answers from the single most relevant chunk of a corpus.
///
/// The corpus is chunked at construction; chunk embeddings are computed
/// lazily on the first `respond` call and reused afterwards.
pub struct RetrievalResponder {
    gateway: Arc<dyn Gateway>,
    persona: String,
    chunks: Vec<KnowledgeChunk>,
    // Empty until the first respond call builds it; then one embedding per
    // chunk, same order. `chunks` is never empty, so emptiness here always
    // means "not built yet".
    index: Mutex<Vec<Vec<f32>>>,
}

impl RetrievalResponder {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        persona: impl Into<String>,
        corpus: &str,
        config: ChunkConfig,
    ) -> DomainResult<Self> {
        let persona = persona.into();
        if persona.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "Persona must not be empty".to_string(),
            ));
        }
        config.validate()?;

        let chunks = chunk_text(corpus, &config);
        if chunks.is_empty() {
            return Err(DomainError::InvalidConfig(
                "Knowledge corpus is empty".to_string(),
            ));
        }
        info!(chunk_count = chunks.len(), "Chunked knowledge corpus");

        Ok(Self {
            gateway,
            persona,
            chunks,
            index: Mutex::new(Vec::new()),
        })
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Find the chunk most similar to the prompt, building the embedding
    /// index on first use.
    async fn best_chunk(&self, prompt_embedding: &[f32]) -> DomainResult<&KnowledgeChunk> {
        let mut index = self.index.lock().await;
        if index.is_empty() {
            let mut built = Vec::with_capacity(self.chunks.len());
            for chunk in &self.chunks {
                built.push(self.gateway.embed(&chunk.text).await?);
            }
            *index = built;
            debug!(chunk_count = self.chunks.len(), "Built chunk embedding index");
        }

        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, embedding) in index.iter().enumerate() {
            let similarity = cosine_similarity(prompt_embedding, embedding);
            if similarity > best_score {
                best_score = similarity;
                best_index = i;
            }
        }

        debug!(chunk = best_index, score = best_score, "Selected chunk");
        Ok(&self.chunks[best_index])
    }
}

#[async_trait::async_trait]
impl Responder for RetrievalResponder {
    async fn respond(&self, input: &str) -> DomainResult<String> {
        let prompt_embedding = self.gateway.embed(input).await?;
        let chunk = self.best_chunk(&prompt_embedding).await?;

        let system_prompt = format!(
            "You are {persona}, a knowledge-based assistant. Forget previous context.",
            persona = self.persona
        );
        let user_prompt = format!(
            "Answer based only on this information: {chunk}. Prompt: {input}",
            chunk = chunk.text
        );

        self.gateway
            .complete(Some(&system_prompt), &user_prompt, DETERMINISTIC_TEMPERATURE)
            .await
    }
}
