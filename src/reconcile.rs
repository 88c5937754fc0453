//! Dual-pass reconciliation of the two orientation schemes' region maps.
//!
//! Every pixel casts one vote pair. The scheme whose region is strictly
//! longer at the pixel gives its record +1 and the other scheme's record −1;
//! ties favour the offset scheme. A record survives with a positive net vote.
//!
//! How region ids turn into record indices is set by [`VoteIndexing`]. The
//! legacy [`VoteIndexing::Aliased`] mode maps "unassigned" and "region 1" to
//! the same record and lets one pixel vote twice on it.
use crate::error::LsrError;
use crate::regions::{LineRegion, RegionMap, RegionTable};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoteIndexing {
    /// `id - 1`, unassigned pixels have no record. Pixels where neither
    /// scheme has a region are skipped; an unassigned side counts as length 0
    /// and receives no vote.
    #[default]
    Distinct,
    /// `max(id - 1, 0)`. Pixels are skipped when the aligned index is 0 and
    /// the offset index is not.
    Aliased,
}

impl VoteIndexing {
    /// Record indices voted on at a pixel, or `None` when it is skipped.
    fn resolve(self, id_a: u32, id_b: u32) -> Option<(Option<usize>, Option<usize>)> {
        match self {
            VoteIndexing::Distinct => {
                if id_a == 0 && id_b == 0 {
                    return None;
                }
                let index = |id: u32| id.checked_sub(1).map(|i| i as usize);
                Some((index(id_a), index(id_b)))
            }
            VoteIndexing::Aliased => {
                let a = id_a.saturating_sub(1) as usize;
                let b = id_b.saturating_sub(1) as usize;
                if a == 0 && b != 0 {
                    None
                } else {
                    Some((Some(a), Some(b)))
                }
            }
        }
    }
}

/// Vote totals for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    pub voting_pixels: usize,
    pub skipped_pixels: usize,
}

/// Accumulate survival votes of every pixel into `table`.
pub fn cast_votes(
    aligned: &RegionMap,
    offset: &RegionMap,
    table: &mut RegionTable,
    indexing: VoteIndexing,
) -> Result<VoteSummary, LsrError> {
    aligned.ids.ensure_same_shape(&offset.ids, "offset region map")?;
    aligned.ids.ensure_same_shape(&aligned.lengths, "aligned region lengths")?;
    aligned.ids.ensure_same_shape(&offset.lengths, "offset region lengths")?;

    let mut summary = VoteSummary::default();
    // index 0 does not exist yet; nothing can vote
    if table.is_empty() {
        return Ok(summary);
    }

    let table_len = table.len();
    let records = table.records_mut();
    for idx in 0..aligned.ids.len() {
        let (id_a, id_b) = (aligned.ids.data[idx], offset.ids.data[idx]);
        let Some((rec_a, rec_b)) = indexing.resolve(id_a, id_b) else {
            summary.skipped_pixels += 1;
            continue;
        };

        let (winner, loser) = if aligned.lengths.data[idx] > offset.lengths.data[idx] {
            (rec_a, rec_b)
        } else {
            (rec_b, rec_a)
        };
        for (rec, delta) in [(winner, 1i64), (loser, -1i64)] {
            let Some(rec) = rec else {
                continue;
            };
            let record = records.get_mut(rec).ok_or(LsrError::UnknownRegion {
                id: rec as u32 + 1,
                table_len,
            })?;
            record.survival += delta;
        }
        summary.voting_pixels += 1;
    }
    Ok(summary)
}

/// Records with a positive vote, projected to [`LineRegion`]. An empty result
/// is replaced by the single [`LineRegion::SENTINEL`] row.
pub fn surviving_regions(table: &RegionTable) -> Vec<LineRegion> {
    let survivors: Vec<LineRegion> = table
        .records()
        .iter()
        .filter(|r| r.survival > 0)
        .map(|r| r.line_region())
        .collect();
    if survivors.is_empty() {
        vec![LineRegion::SENTINEL]
    } else {
        survivors
    }
}

/// Outcome of [`reconcile`].
#[derive(Clone, Debug, PartialEq)]
pub struct Reconciliation {
    pub regions: Vec<LineRegion>,
    /// True when no record survived and `regions` is the sentinel row.
    pub sentinel: bool,
    pub votes: VoteSummary,
}

/// Vote, then keep the survivors.
pub fn reconcile(
    aligned: &RegionMap,
    offset: &RegionMap,
    table: &mut RegionTable,
    indexing: VoteIndexing,
) -> Result<Reconciliation, LsrError> {
    let votes = cast_votes(aligned, offset, table, indexing)?;
    let survivors = table.records().iter().filter(|r| r.survival > 0).count();
    debug!(
        "reconcile candidates={} survivors={} voting={} skipped={}",
        table.len(),
        survivors,
        votes.voting_pixels,
        votes.skipped_pixels
    );
    Ok(Reconciliation {
        regions: surviving_regions(table),
        sentinel: survivors == 0,
        votes,
    })
}
