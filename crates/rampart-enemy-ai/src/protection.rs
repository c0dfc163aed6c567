//! "Seek protection": Basic enemies tuck in behind the nearest Shield.

use glam::Vec2;

use rampart_core::constants::{PROTECTION_BAND, PROTECTION_GAP};
use rampart_core::types::Body;

/// A Basic enemy looking for cover.
#[derive(Debug, Clone, Copy)]
pub struct Seeker<K> {
    pub id: K,
    pub body: Body,
    pub knocked_back: bool,
}

/// For every seeker with a Shield inside the horizontal band, compute the
/// spot just behind (to the right of) the nearest such Shield on its lane.
/// Knocked-back seekers are left alone.
pub fn seek_protection<K: Copy>(seekers: &[Seeker<K>], shields: &[Body]) -> Vec<(K, Vec2)> {
    let mut moves = Vec::new();

    for seeker in seekers {
        if seeker.knocked_back {
            continue;
        }

        let mut nearest: Option<(&Body, f32)> = None;
        for shield in shields {
            let dx = (shield.center.x - seeker.body.center.x).abs();
            if dx > PROTECTION_BAND {
                continue;
            }
            if nearest.map_or(true, |(_, best)| dx < best) {
                nearest = Some((shield, dx));
            }
        }

        if let Some((shield, _)) = nearest {
            let target = Vec2::new(
                shield.center.x + shield.half_width() + seeker.body.half_width() + PROTECTION_GAP,
                shield.center.y,
            );
            if target != seeker.body.center {
                moves.push((seeker.id, target));
            }
        }
    }

    moves
}
