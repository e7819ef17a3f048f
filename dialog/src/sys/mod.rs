#[cfg(all(feature = "native", not(any(target_os = "android", target_os = "ios"))))]
mod desktop;
#[cfg(all(feature = "native", not(any(target_os = "android", target_os = "ios"))))]
pub use desktop::show_alert;

#[cfg(not(all(feature = "native", not(any(target_os = "android", target_os = "ios")))))]
#[allow(clippy::unused_async)]
pub async fn show_alert(_: crate::Dialog) -> Result<(), crate::DialogError> {
    Err(crate::DialogError::EnvironmentUnavailable(
        "no native dialog backend for this build".to_string(),
    ))
}
