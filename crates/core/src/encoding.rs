//! Transport encoding for uploaded images.
//!
//! Bytes go out exactly as uploaded: no decoding, resizing or re-encoding.

use base64::{engine::general_purpose, Engine as _};

use crate::media::AnalysisRequest;

/// Standard (padded) base64 of the raw image bytes.
pub fn encode_image(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// `data:` URI embedding the request's image with its own media type.
pub fn data_uri(request: &AnalysisRequest) -> String {
    format!(
        "data:{};base64,{}",
        request.media_type().as_mime(),
        encode_image(request.image_bytes())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaType;
    use proptest::prelude::*;

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode_image(&[]), "");
    }

    #[test]
    fn uses_standard_alphabet_with_padding() {
        assert_eq!(encode_image(&[0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn png_upload_is_labeled_png() {
        let req = AnalysisRequest::new(vec![0x89, b'P', b'N', b'G'], MediaType::Png);
        assert_eq!(data_uri(&req), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn jpeg_upload_is_labeled_jpeg() {
        let req = AnalysisRequest::new(vec![0xff, 0xd8, 0xff], MediaType::Jpeg);
        assert!(data_uri(&req).starts_with("data:image/jpeg;base64,"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: decoding the encoder's output reproduces the input bytes.
        #[test]
        fn encoding_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..4096)) {
            let encoded = encode_image(&bytes);
            let decoded = general_purpose::STANDARD.decode(encoded.as_bytes()).unwrap();
            prop_assert_eq!(decoded, bytes);
        }
    }
}
