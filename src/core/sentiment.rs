use crate::domain::model::Sentiment;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Scored word lists for product-review text. Scores sit in [-1, 1];
/// modifiers multiply the next sentiment word; negations flip it.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    scores: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl SentimentLexicon {
    pub fn new() -> Self {
        let scored_words = [
            // Strongly positive
            ("love", 0.7),
            ("loved", 0.7),
            ("excellent", 0.8),
            ("amazing", 0.8),
            ("fantastic", 0.8),
            ("perfect", 0.85),
            ("awesome", 0.75),
            ("great", 0.7),
            ("wonderful", 0.75),
            ("best", 0.7),
            ("incredible", 0.85),
            ("outstanding", 0.8),
            ("superb", 0.8),
            ("delighted", 0.75),
            ("impressed", 0.65),
            ("recommend", 0.6),
            ("recommended", 0.6),
            // Moderately positive
            ("good", 0.5),
            ("nice", 0.45),
            ("happy", 0.55),
            ("fast", 0.4),
            ("quick", 0.4),
            ("friendly", 0.45),
            ("helpful", 0.5),
            ("easy", 0.4),
            ("smooth", 0.4),
            ("sturdy", 0.45),
            ("reliable", 0.55),
            ("satisfied", 0.55),
            ("pleased", 0.55),
            ("comfortable", 0.45),
            ("durable", 0.5),
            ("responsive", 0.45),
            ("works", 0.35),
            ("worth", 0.45),
            // Strongly negative
            ("terrible", -0.8),
            ("horrible", -0.85),
            ("awful", -0.8),
            ("worst", -0.85),
            ("hate", -0.75),
            ("hated", -0.75),
            ("broken", -0.7),
            ("useless", -0.8),
            ("garbage", -0.85),
            ("trash", -0.8),
            ("scam", -0.95),
            ("fraud", -0.95),
            ("defective", -0.75),
            ("unusable", -0.8),
            ("disaster", -0.9),
            ("disgusting", -0.85),
            // Moderately negative
            ("bad", -0.5),
            ("poor", -0.55),
            ("slow", -0.4),
            ("late", -0.45),
            ("rude", -0.55),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("flimsy", -0.5),
            ("overpriced", -0.5),
            ("damaged", -0.55),
            ("missing", -0.45),
            ("waste", -0.6),
            ("wrong", -0.4),
            ("faulty", -0.6),
            ("refund", -0.5),
            ("annoying", -0.45),
            ("uncomfortable", -0.45),
            ("noisy", -0.35),
        ];

        let modifier_words = [
            ("very", 1.5),
            ("really", 1.4),
            ("extremely", 1.8),
            ("incredibly", 1.7),
            ("absolutely", 1.6),
            ("totally", 1.4),
            ("super", 1.5),
            ("highly", 1.4),
            ("quite", 1.2),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("barely", 0.6),
        ];

        let negation_words = [
            "not", "no", "never", "neither", "nothing", "nobody", "dont", "don't", "doesnt",
            "doesn't", "didnt", "didn't", "cant", "can't", "couldnt", "couldn't", "wont", "won't",
            "wouldnt", "wouldn't", "isnt", "isn't", "wasnt", "wasn't", "arent", "aren't",
        ];

        Self {
            scores: scored_words
                .iter()
                .map(|(w, s)| (w.to_string(), *s))
                .collect(),
            modifiers: modifier_words
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            negations: negation_words.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexicon polarity scorer with a binary verdict: score > 0 is Positive,
/// everything else is Negative. Empty and fully neutral text land on the
/// Negative side; there is no neutral label.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: SentimentLexicon,
    tokenizer: Regex,
    negation_window: usize,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::new(),
            tokenizer: Regex::new(r"[a-z']+").unwrap(),
            negation_window: 3,
        }
    }

    pub fn with_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Polarity in [-1, 1]. Negations within the window flip and dampen the
    /// following sentiment word; a modifier scales only the next one.
    pub fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();

        let mut total = 0.0;
        let mut hits = 0usize;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0usize;

        for token in self.tokenizer.find_iter(&lowered) {
            let word = token.as_str();

            if self.lexicon.is_negation(word) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.lexicon.modifier(word) {
                current_modifier = modifier;
                continue;
            }

            if let Some(base) = self.lexicon.score(word) {
                let mut score = base * current_modifier;
                if negation_active && words_since_negation < self.negation_window {
                    score = -score * 0.8;
                }
                total += score;
                hits += 1;
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        if hits == 0 {
            0.0
        } else {
            (total / hits as f64).clamp(-1.0, 1.0)
        }
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        if self.score(text) > 0.0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_review() {
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("I love this product"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_negative_review() {
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("terrible, worst purchase"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_empty_text_is_negative() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify(""), Sentiment::Negative);
    }

    #[test]
    fn test_neutral_text_folds_to_negative() {
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("The box contained a cable and a manual"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_negation_flips_polarity() {
        let classifier = SentimentClassifier::new();
        assert!(classifier.score("not good at all") < 0.0);
        assert_eq!(classifier.classify("this is not great"), Sentiment::Negative);
    }

    #[test]
    fn test_modifier_scales_score() {
        let classifier = SentimentClassifier::new();
        assert!(classifier.score("very great") > classifier.score("great"));
        assert!(classifier.score("slightly great") < classifier.score("great"));
    }

    #[test]
    fn test_mixed_review_leans_on_balance() {
        let classifier = SentimentClassifier::new();
        // One strong negative outweighs a mild positive.
        assert_eq!(
            classifier.classify("nice packaging but the device arrived broken"),
            Sentiment::Negative
        );
    }
}
