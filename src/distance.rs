use std::any::Any;

use thiserror::Error;

/// Reasons a distance cannot be computed for a pair of operands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    #[error("distance can only be calculated between two strings")]
    TypeMismatch,

    #[error("strings do not have equal length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

/// Number of positions at which two equal-length strings differ.
///
/// Lengths are compared in characters, not bytes.
pub fn hamming(a: &str, b: &str) -> Result<usize, DistanceError> {
    let (left, right) = (a.chars().count(), b.chars().count());
    if left != right {
        return Err(DistanceError::LengthMismatch { left, right });
    }

    Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> Result<usize, DistanceError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return Ok(b.len());
    }
    if b.is_empty() {
        return Ok(a.len());
    }

    // rows walk `b`, columns walk `a`
    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            matrix[i][j] = if b[i - 1] == a[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                let substitution = matrix[i - 1][j - 1] + 1;
                let insertion = matrix[i][j - 1] + 1;
                let deletion = matrix[i - 1][j] + 1;
                substitution.min(insertion).min(deletion)
            };
        }
    }

    Ok(matrix[b.len()][a.len()])
}

/// Hamming distance for operands whose type is only known at runtime
pub fn hamming_any(a: &dyn Any, b: &dyn Any) -> Result<usize, DistanceError> {
    hamming(&text_of(a)?, &text_of(b)?)
}

/// Levenshtein distance for operands whose type is only known at runtime
pub fn levenshtein_any(a: &dyn Any, b: &dyn Any) -> Result<usize, DistanceError> {
    levenshtein(&text_of(a)?, &text_of(b)?)
}

fn text_of(value: &dyn Any) -> Result<String, DistanceError> {
    if let Some(s) = value.downcast_ref::<String>() {
        Ok(s.clone())
    } else if let Some(s) = value.downcast_ref::<&str>() {
        Ok((*s).to_string())
    } else if let Some(chars) = value.downcast_ref::<Vec<char>>() {
        Ok(chars.iter().collect())
    } else if let Some(chars) = value.downcast_ref::<&[char]>() {
        Ok(chars.iter().collect())
    } else {
        Err(DistanceError::TypeMismatch)
    }
}
