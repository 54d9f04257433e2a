/// Kinds of feedback cues emitted on the audio/vibration side channel.
///
/// Cues are fire-and-forget: frontends may realize them as sounds, a
/// terminal bell, or a screen flash, and failures are swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CueKind {
    /// A point was scored.
    Score,
    /// The turn timer entered its warning window, or a player reached the hill.
    TimeWarning,
    /// The turn timer expired. Doubles as the victory cue.
    TimeUp,
}
