mod host;

#[cfg(test)]
pub(crate) use host::HostError;
pub(crate) use host::{HostRuntime, HostSignal, LocalExtensionHost};
