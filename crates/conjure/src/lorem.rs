use crate::{EntropySource, Result, Sampler};
use tracing::instrument;

/// The placeholder vocabulary.
pub const LOREM_WORDS: [&str; 19] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
];

/// Fewest words in a sentence, and fewest sentences in a paragraph.
pub const LOREM_MIN_RUN: u64 = 5;

/// Most words in a sentence, and most sentences in a paragraph.
pub const LOREM_MAX_RUN: u64 = 14;

/// Unit counted by [`LoremGenerator::generate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoremFormat {
    /// Lowercase words separated by spaces.
    #[default]
    Words,
    /// Capitalized sentences ending in a period, separated by spaces.
    Sentences,
    /// Runs of sentences separated by a blank line.
    Paragraphs,
}

/// Generates placeholder text from [`LOREM_WORDS`].
#[derive(Default, Clone, Copy, Debug)]
pub struct LoremGenerator<R> {
    sampler: Sampler<R>,
}

impl<R> LoremGenerator<R>
where
    R: EntropySource,
{
    pub const fn new(rng: R) -> Self {
        Self {
            sampler: Sampler::new(rng),
        }
    }

    /// Returns `count` units of placeholder text. A zero count yields the
    /// empty string.
    ///
    /// # Errors
    ///
    /// - [`Error::EntropyExhausted`] if a word or run length could not be
    ///   drawn.
    ///
    /// [`Error::EntropyExhausted`]: crate::Error::EntropyExhausted
    ///
    /// # Example
    /// ```
    /// use conjure::{LoremFormat, LoremGenerator, ThreadRandom};
    ///
    /// let text = LoremGenerator::new(ThreadRandom)
    ///     .generate(3, LoremFormat::Words)
    ///     .unwrap();
    /// assert_eq!(text.split(' ').count(), 3);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn generate(&self, count: usize, format: LoremFormat) -> Result<String> {
        let units = (0..count)
            .map(|_| match format {
                LoremFormat::Words => self.word().map(str::to_owned),
                LoremFormat::Sentences => self.sentence(),
                LoremFormat::Paragraphs => self.paragraph(),
            })
            .collect::<Result<Vec<_>>>()?;
        let separator = match format {
            LoremFormat::Paragraphs => "\n\n",
            _ => " ",
        };
        Ok(units.join(separator))
    }

    fn word(&self) -> Result<&'static str> {
        self.sampler.pick(&LOREM_WORDS).copied()
    }

    fn run_length(&self) -> Result<usize> {
        Ok(self
            .sampler
            .uniform_u64_inclusive(LOREM_MIN_RUN, LOREM_MAX_RUN)? as usize)
    }

    fn sentence(&self) -> Result<String> {
        let words = (0..self.run_length()?)
            .map(|_| self.word())
            .collect::<Result<Vec<_>>>()?;
        let mut sentence = words.join(" ");
        // The vocabulary is ASCII, so the first byte is a whole character.
        sentence[..1].make_ascii_uppercase();
        sentence.push('.');
        Ok(sentence)
    }

    fn paragraph(&self) -> Result<String> {
        let sentences = (0..self.run_length()?)
            .map(|_| self.sentence())
            .collect::<Result<Vec<_>>>()?;
        Ok(sentences.join(" "))
    }
}
