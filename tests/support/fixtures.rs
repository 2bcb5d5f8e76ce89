//! Test fixtures and constants.

/// AES-256 key in textual form.
pub const FIXTURE_KEY: &str = "AES:LICx0yKzQm5a6IE13aJ3xOsRv+8AujqHocTFI4yk4Jw=";

/// Token produced with [`FIXTURE_KEY`]; decrypts to [`FIXTURE_PLAINTEXT`].
pub const FIXTURE_TOKEN: &str = "${enc:eyJ0eXBlIjoiQUVTIiwibW9kZSI6IkdDTSIsImNpcGhlcnRleHQiOiJNOTRrSXlvYTUrMloiLCJpdiI6InVBR3FSbFA5d2l6cGRCMHoiLCJ0YWciOiJBQ1N1ekR3VFVMb21zanhwRk1rWUtBPT0ifQ==}";

/// Plaintext of [`FIXTURE_TOKEN`].
pub const FIXTURE_PLAINTEXT: &str = "plaintext";

/// A different valid AES key.
pub const OTHER_KEY: &str = "AES:AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

/// The fixture key, parsed.
pub fn fixture_key() -> encvar::KeyWithType {
    FIXTURE_KEY.parse().expect("fixture key parses")
}

/// Sample JSON config with tokens at several depths.
pub fn sample_json() -> String {
    format!(
        r#"{{
  "name": "billing",
  "port": 8443,
  "database": {{
    "url": "postgres://billing@db/billing",
    "password": "{token}"
  }},
  "upstreams": ["https://a", "token={token}"]
}}
"#,
        token = FIXTURE_TOKEN
    )
}

/// Sample TOML config with tokens.
pub fn sample_toml() -> String {
    format!(
        r#"name = "billing"
port = 8443

[database]
password = "{token}"
url = "postgres://billing@db/billing"
"#,
        token = FIXTURE_TOKEN
    )
}
