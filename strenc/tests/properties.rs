//! Properties that must hold for any corpus, checked against randomly generated inputs.
use proptest::prelude::*;
use std::collections::HashSet;
use strenc::tokenizer::tokens;
use strenc::{
    BagOfWordsEncoder, CharExtract, DictionaryEncoder, DictionaryEncoding, Matrix, RaggedRows,
    SplitByAnyOf,
};

/// Small alphabet so that tokens repeat often
fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ab ,]{0,20}", 0..8)
}

fn tokenizer() -> SplitByAnyOf {
    SplitByAnyOf::new(" ,")
}

proptest! {
    #[test]
    fn encoding_is_deterministic(inputs in corpus()) {
        let mut first = BagOfWordsEncoder::default();
        let mut second = BagOfWordsEncoder::default();
        let mut first_output = Matrix::default();
        let mut second_output = Matrix::default();

        first.encode(&inputs, &mut first_output, &tokenizer()).unwrap();
        second.encode(&inputs, &mut second_output, &tokenizer()).unwrap();

        prop_assert_eq!(first.dictionary(), second.dictionary());
        prop_assert_eq!(first_output, second_output);
    }

    #[test]
    fn ids_are_a_bijection(inputs in corpus()) {
        let tokenizer = tokenizer();
        let mut encoder = DictionaryEncoder::default();
        let mut output = RaggedRows::new();
        encoder.encode(&inputs, &mut output, &tokenizer).unwrap();

        let distinct: HashSet<&[u8]> = inputs
            .iter()
            .flat_map(|input| tokens(&tokenizer, input.as_bytes()))
            .collect();
        let dictionary = encoder.dictionary();
        prop_assert_eq!(distinct.len(), dictionary.len());

        for (token, id) in dictionary.mapping() {
            prop_assert!(id < dictionary.len());
            prop_assert_eq!(Some(id), dictionary.find(token));
            prop_assert_eq!(Some(token), dictionary.token(id));
        }
    }

    #[test]
    fn unpadded_rows_decode_to_tokens(inputs in corpus()) {
        let tokenizer = tokenizer();
        let mut encoder = DictionaryEncoder::default();
        let mut output = RaggedRows::new();
        encoder.encode(&inputs, &mut output, &tokenizer).unwrap();

        prop_assert_eq!(inputs.len(), output.len());
        for (input, row) in inputs.iter().zip(output.iter()) {
            let expected: Vec<&[u8]> = tokens(&tokenizer, input.as_bytes()).collect();
            prop_assert_eq!(expected, encoder.decode_row(row.iter().copied()).unwrap());
        }
    }

    #[test]
    fn padding_is_zero(inputs in corpus()) {
        let tokenizer = tokenizer();
        let mut encoder = DictionaryEncoder::default();
        let mut output = Matrix::default();
        encoder.encode(&inputs, &mut output, &tokenizer).unwrap();

        for (row, input) in inputs.iter().enumerate() {
            let n_tokens = tokens(&tokenizer, input.as_bytes()).count();
            let values = output.row(row).unwrap();

            prop_assert!(values[..n_tokens].iter().all(|&v| v != DictionaryEncoding::PADDING as f64));
            prop_assert!(values[n_tokens..].iter().all(|&v| v == DictionaryEncoding::PADDING as f64));
        }
    }

    #[test]
    fn bag_of_words_rows_count_tokens(inputs in corpus()) {
        let mut encoder = BagOfWordsEncoder::default();
        let mut output = Matrix::default();
        encoder.encode(&inputs, &mut output, &CharExtract).unwrap();

        prop_assert_eq!(encoder.dictionary().len(), output.n_cols());
        for (row, input) in inputs.iter().enumerate() {
            let total: f64 = output.row(row).unwrap().iter().sum();
            prop_assert_eq!(input.len() as f64, total);
        }
    }

    #[test]
    fn reset_reproduces_mapping(inputs in corpus(), noise in corpus()) {
        let tokenizer = tokenizer();
        let mut encoder = DictionaryEncoder::default();
        let mut output = RaggedRows::new();

        encoder.encode(&inputs, &mut output, &tokenizer).unwrap();
        let dictionary = encoder.dictionary().clone();
        let encoded = output.clone();

        encoder.encode(&noise, &mut output, &tokenizer).unwrap();
        encoder.reset();
        encoder.encode(&inputs, &mut output, &tokenizer).unwrap();

        prop_assert_eq!(&dictionary, encoder.dictionary());
        prop_assert_eq!(encoded, output);
    }
}
