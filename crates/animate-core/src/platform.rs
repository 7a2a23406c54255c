//! Platform abstraction traits for runtime services.
//!
//! The runtime never talks to a windowing system directly. Hosts plug in a
//! [`RuntimeScheduler`] to learn when a frame is needed and a [`Clock`] to
//! measure elapsed time.

/// Receives frame requests from the runtime.
///
/// Implementations typically flip a flag and wake the host event loop. They
/// must be callable from any thread because event-loop proxies usually are.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;
}
