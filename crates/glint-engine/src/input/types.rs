/// Keyboard key identifier.
///
/// Intentionally minimal: the demos only observe a quit key and a couple of
/// toggles. Unmapped platform keys are preserved as `Key::Unknown` with the
/// platform scancode so a later mapping can stay stable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}
