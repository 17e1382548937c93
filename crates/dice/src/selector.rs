use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("cannot pick from an empty list of emotions")]
    Empty,
}

/// Picks one entry uniformly at random using the thread-local generator.
/// 使用執行緒區域亂數產生器，均勻隨機挑選一個項目。
pub fn pick_random(entries: &[String]) -> Result<&str, SelectError> {
    let mut rng = rand::thread_rng();
    pick_random_with(entries, &mut rng)
}

/// Picks one entry uniformly at random from `rng`.
pub fn pick_random_with<'a, R>(
    entries: &'a [String],
    rng: &mut R,
) -> Result<&'a str, SelectError>
where
    R: Rng + ?Sized,
{
    let picked = entries.choose(rng).ok_or(SelectError::Empty)?;
    debug!("picked '{picked}' out of {} entries", entries.len());
    Ok(picked)
}
