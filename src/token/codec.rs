//! Token wire format
//!
//! A token is a one-character format version followed by the URL-safe
//! base64 (no padding) of a big-endian binary payload. Field order is fixed:
//! stamp, then language, then logic, then premise. Encoding is
//! deterministic, so equal specs always produce the identical string, and
//! injective, so distinct specs never collide.
//!
//! Version `1` payload layout:
//!
//! ```text
//! time tag        u8    0 = latest, 1 = fixed
//! time value      i64   only when tag = 1
//! path id         u32
//! precedence      u8    0 = path, 1 = time
//! module count    u32   followed by count u32s, strictly ascending
//! state count     u8    followed by count u8 codes, strictly ascending
//! language id     u32
//! dialect count   u32   followed by count u32s, order preserved
//! desc-type count u32   followed by count u32s, order preserved
//! logic ids       u32 x 4
//! premise         u8    0 = stated, 1 = inferred
//! ```
//!
//! Set-valued fields are written sorted and decoded with the same
//! strictly-ascending requirement, so every accepted string re-encodes to
//! itself. Both functions are pure and safe under any concurrency.

use crate::coordinate::{
    CoordinateSpec, LanguageSpec, LogicSpec, Precedence, PremiseType, StampSpec, StampTime, Status,
};
use crate::error::{Error, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use byteorder::{BigEndian, ReadBytesExt};
use std::collections::BTreeSet;

/// Current token format version character
pub const FORMAT_VERSION: char = '1';

const TIME_LATEST: u8 = 0;
const TIME_FIXED: u8 = 1;

// ============================================================================
// Encoding
// ============================================================================

/// Encode a coordinate spec into its canonical token string
pub fn encode(spec: &CoordinateSpec) -> String {
    let payload = write_spec(spec);
    let mut token = String::with_capacity(1 + (payload.len() * 4).div_ceil(3));
    token.push(FORMAT_VERSION);
    URL_SAFE_NO_PAD.encode_string(&payload, &mut token);
    token
}

fn write_spec(spec: &CoordinateSpec) -> Vec<u8> {
    let mut buf = Vec::with_capacity(96);

    // stamp
    match spec.stamp.time {
        StampTime::Latest => buf.push(TIME_LATEST),
        StampTime::At(millis) => {
            buf.push(TIME_FIXED);
            buf.extend_from_slice(&millis.to_be_bytes());
        }
    }
    buf.extend_from_slice(&spec.stamp.path_id.to_be_bytes());
    buf.push(precedence_code(spec.stamp.precedence));
    buf.extend_from_slice(&(spec.stamp.modules.len() as u32).to_be_bytes());
    for module in &spec.stamp.modules {
        buf.extend_from_slice(&module.to_be_bytes());
    }
    buf.push(spec.stamp.allowed_states.len() as u8);
    for status in &spec.stamp.allowed_states {
        buf.push(status_code(*status));
    }

    // language
    buf.extend_from_slice(&spec.language.language_id.to_be_bytes());
    write_u32_list(&mut buf, &spec.language.dialect_prefs);
    write_u32_list(&mut buf, &spec.language.description_type_prefs);

    // logic
    buf.extend_from_slice(&spec.logic.stated_assemblage_id.to_be_bytes());
    buf.extend_from_slice(&spec.logic.inferred_assemblage_id.to_be_bytes());
    buf.extend_from_slice(&spec.logic.description_profile_id.to_be_bytes());
    buf.extend_from_slice(&spec.logic.classifier_id.to_be_bytes());

    // premise
    buf.push(premise_code(spec.premise));

    buf
}

fn write_u32_list(buf: &mut Vec<u8>, values: &[u32]) {
    buf.extend_from_slice(&(values.len() as u32).to_be_bytes());
    for value in values {
        buf.extend_from_slice(&value.to_be_bytes());
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a token string back into a coordinate spec
///
/// Fails with [`Error::UnsupportedTokenVersion`] when the leading version
/// character is unrecognized and with [`Error::MalformedToken`] on any
/// layout violation. Never returns a partially populated spec.
pub fn decode(token: &str) -> Result<CoordinateSpec> {
    let version = token
        .chars()
        .next()
        .ok_or_else(|| Error::malformed_token("empty token"))?;
    if version != FORMAT_VERSION {
        return Err(Error::UnsupportedTokenVersion { version });
    }

    let payload = URL_SAFE_NO_PAD
        .decode(&token[version.len_utf8()..])
        .map_err(|e| Error::malformed_token(format!("invalid token body: {e}")))?;

    let mut rest = payload.as_slice();
    let spec = read_spec(&mut rest)?;
    if !rest.is_empty() {
        return Err(Error::malformed_token(format!(
            "{} trailing bytes after payload",
            rest.len()
        )));
    }
    Ok(spec)
}

fn read_spec(buf: &mut &[u8]) -> Result<CoordinateSpec> {
    let stamp = read_stamp(buf)?;
    let language = read_language(buf)?;
    let logic = read_logic(buf)?;
    let premise = premise_from_code(read_u8(buf)?)?;
    Ok(CoordinateSpec {
        stamp,
        language,
        logic,
        premise,
    })
}

fn read_stamp(buf: &mut &[u8]) -> Result<StampSpec> {
    let time = match read_u8(buf)? {
        TIME_LATEST => StampTime::Latest,
        TIME_FIXED => StampTime::At(read_i64(buf)?),
        tag => {
            return Err(Error::malformed_token(format!("unknown time tag {tag}")));
        }
    };
    let path_id = read_u32(buf)?;
    let precedence = precedence_from_code(read_u8(buf)?)?;

    let module_count = read_list_len(buf)?;
    let mut modules = BTreeSet::new();
    let mut previous: Option<u32> = None;
    for _ in 0..module_count {
        let module = read_u32(buf)?;
        if previous.is_some_and(|p| p >= module) {
            return Err(Error::malformed_token("module ids not strictly ascending"));
        }
        previous = Some(module);
        modules.insert(module);
    }

    let state_count = read_u8(buf)?;
    if state_count == 0 {
        return Err(Error::malformed_token("allowed states must not be empty"));
    }
    let mut allowed_states = BTreeSet::new();
    let mut previous: Option<u8> = None;
    for _ in 0..state_count {
        let code = read_u8(buf)?;
        if previous.is_some_and(|p| p >= code) {
            return Err(Error::malformed_token("state codes not strictly ascending"));
        }
        previous = Some(code);
        allowed_states.insert(status_from_code(code)?);
    }

    Ok(StampSpec {
        time,
        path_id,
        precedence,
        modules,
        allowed_states,
    })
}

fn read_language(buf: &mut &[u8]) -> Result<LanguageSpec> {
    Ok(LanguageSpec {
        language_id: read_u32(buf)?,
        dialect_prefs: read_u32_list(buf)?,
        description_type_prefs: read_u32_list(buf)?,
    })
}

fn read_logic(buf: &mut &[u8]) -> Result<LogicSpec> {
    Ok(LogicSpec {
        stated_assemblage_id: read_u32(buf)?,
        inferred_assemblage_id: read_u32(buf)?,
        description_profile_id: read_u32(buf)?,
        classifier_id: read_u32(buf)?,
    })
}

fn read_u32_list(buf: &mut &[u8]) -> Result<Vec<u32>> {
    let count = read_list_len(buf)?;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(read_u32(buf)?);
    }
    Ok(values)
}

fn read_list_len(buf: &mut &[u8]) -> Result<usize> {
    let count = read_u32(buf)? as usize;
    // each element is 4 bytes; a count the payload cannot hold is garbage
    if count > buf.len() / 4 {
        return Err(Error::malformed_token(format!(
            "list length {count} exceeds remaining payload"
        )));
    }
    Ok(count)
}

fn read_u8(buf: &mut &[u8]) -> Result<u8> {
    buf.read_u8()
        .map_err(|_| Error::malformed_token("truncated token payload"))
}

fn read_u32(buf: &mut &[u8]) -> Result<u32> {
    buf.read_u32::<BigEndian>()
        .map_err(|_| Error::malformed_token("truncated token payload"))
}

fn read_i64(buf: &mut &[u8]) -> Result<i64> {
    buf.read_i64::<BigEndian>()
        .map_err(|_| Error::malformed_token("truncated token payload"))
}

// ============================================================================
// Wire codes
// ============================================================================

fn precedence_code(precedence: Precedence) -> u8 {
    match precedence {
        Precedence::Path => 0,
        Precedence::Time => 1,
    }
}

fn precedence_from_code(code: u8) -> Result<Precedence> {
    match code {
        0 => Ok(Precedence::Path),
        1 => Ok(Precedence::Time),
        _ => Err(Error::malformed_token(format!(
            "unknown precedence code {code}"
        ))),
    }
}

fn status_code(status: Status) -> u8 {
    match status {
        Status::Active => 0,
        Status::Inactive => 1,
        Status::Primordial => 2,
        Status::Canceled => 3,
    }
}

fn status_from_code(code: u8) -> Result<Status> {
    match code {
        0 => Ok(Status::Active),
        1 => Ok(Status::Inactive),
        2 => Ok(Status::Primordial),
        3 => Ok(Status::Canceled),
        _ => Err(Error::malformed_token(format!("unknown state code {code}"))),
    }
}

fn premise_code(premise: PremiseType) -> u8 {
    match premise {
        PremiseType::Stated => 0,
        PremiseType::Inferred => 1,
    }
}

fn premise_from_code(code: u8) -> Result<PremiseType> {
    match code {
        0 => Ok(PremiseType::Stated),
        1 => Ok(PremiseType::Inferred),
        _ => Err(Error::malformed_token(format!(
            "unknown premise code {code}"
        ))),
    }
}
