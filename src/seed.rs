// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Placeholder content for bulk reseeding.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::store::NewCompany;

const ADJECTIVES: &[&str] = &[
    "agile", "bold", "bright", "calm", "candid", "clever", "cosmic", "crisp", "daring", "eager",
    "elegant", "fearless", "fierce", "gentle", "golden", "grand", "honest", "humble", "lively",
    "loyal", "lucid", "mighty", "modern", "nimble", "noble", "polished", "proud", "quiet",
    "radiant", "rapid", "robust", "savvy", "serene", "sleek", "solid", "steady", "sturdy",
    "swift", "tidy", "vivid", "warm", "wise", "zealous",
];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &'a [&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or("lorem")
}

/// A single capitalised lorem-ipsum sentence of 4-12 words.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(4..=12);
    let mut words: Vec<String> = (0..count)
        .map(|_| pick(rng, LOREM_WORDS).to_string())
        .collect();
    if let Some(first) = words.first_mut() {
        let mut chars = first.chars();
        if let Some(c) = chars.next() {
            *first = c.to_uppercase().chain(chars).collect();
        }
    }
    format!("{}.", words.join(" "))
}

/// A paragraph of `min..=max` sentences.
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
    let count = rng.gen_range(min.max(1)..=max.max(min).max(1));
    (0..count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random field values for one reseeded company.
///
/// Title is a single adjective, description a 3-7 sentence paragraph and
/// review a 1-5 sentence paragraph.
pub fn placeholder_company() -> NewCompany {
    let mut rng = rand::thread_rng();
    NewCompany::new(
        pick(&mut rng, ADJECTIVES),
        paragraph(&mut rng, 3, 7),
        paragraph(&mut rng, 1, 5),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_placeholder_is_valid_record() {
        for _ in 0..50 {
            let company = placeholder_company();
            assert!(company.validate().is_ok(), "{company:?}");
            assert!(ADJECTIVES.contains(&company.title.as_str()));
        }
    }

    #[test]
    fn test_paragraph_sentence_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let text = paragraph(&mut rng, 1, 5);
            let sentences = text.matches('.').count();
            assert!((1..=5).contains(&sentences), "{text}");
        }
    }

    #[test]
    fn test_sentence_is_capitalised_and_terminated() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = sentence(&mut rng);
        assert!(s.ends_with('.'));
        assert!(s.chars().next().is_some_and(|c| c.is_uppercase()));
    }
}
