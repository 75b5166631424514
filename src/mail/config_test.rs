use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize env mutation across this file's tests.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()`.
unsafe fn clear_mail_env() {
    unsafe {
        for var in [
            "MAIL_PROVIDER",
            "EMAILJS_SERVICE_ID",
            "EMAILJS_TEMPLATE_ID",
            "EMAILJS_PUBLIC_KEY",
            "EMAILJS_ACCESS_TOKEN",
            "EMAILJS_API_URL",
            "RESEND_API_KEY",
            "RESEND_FROM",
            "CONTACT_INBOX",
            "MAIL_REQUEST_TIMEOUT_SECS",
        ] {
            std::env::remove_var(var);
        }
    }
}

#[test]
fn from_env_defaults_to_log() {
    let _env = env_guard();
    unsafe { clear_mail_env() };

    let cfg = MailConfig::from_env().unwrap();
    assert_eq!(cfg, MailConfig::log_only());
    assert_eq!(cfg.request_timeout_secs, DEFAULT_MAIL_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_env_parses_emailjs() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("MAIL_PROVIDER", "emailjs");
        std::env::set_var("EMAILJS_SERVICE_ID", "service_abc");
        std::env::set_var("EMAILJS_TEMPLATE_ID", "template_xyz");
        std::env::set_var("EMAILJS_PUBLIC_KEY", "pk_123");
        std::env::set_var("MAIL_REQUEST_TIMEOUT_SECS", "7");
    }

    let cfg = MailConfig::from_env().unwrap();
    assert_eq!(
        cfg.provider,
        ProviderConfig::EmailJs(EmailJsConfig {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk_123".into(),
            access_token: None,
            api_url: DEFAULT_EMAILJS_API_URL.into(),
            inbox: None,
        })
    );
    assert_eq!(cfg.request_timeout_secs, 7);

    unsafe { clear_mail_env() };
}

#[test]
fn from_env_emailjs_missing_key_errors() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("MAIL_PROVIDER", "emailjs");
        std::env::set_var("EMAILJS_SERVICE_ID", "service_abc");
        std::env::set_var("EMAILJS_TEMPLATE_ID", "template_xyz");
    }

    let err = MailConfig::from_env().unwrap_err();
    assert_eq!(err, MailConfigError::MissingVar { var: "EMAILJS_PUBLIC_KEY".into() });

    unsafe { clear_mail_env() };
}

#[test]
fn from_env_parses_resend() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("MAIL_PROVIDER", "resend");
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("RESEND_FROM", "Site <site@example.com>");
        std::env::set_var("CONTACT_INBOX", "office@example.com");
    }

    let cfg = MailConfig::from_env().unwrap();
    assert_eq!(
        cfg.provider,
        ProviderConfig::Resend(ResendConfig {
            api_key: "re_test".into(),
            from: "Site <site@example.com>".into(),
            to: "office@example.com".into(),
        })
    );

    unsafe { clear_mail_env() };
}

#[test]
fn from_env_blank_value_counts_as_missing() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("MAIL_PROVIDER", "resend");
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("RESEND_FROM", "   ");
    }

    let err = MailConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("RESEND_FROM"));

    unsafe { clear_mail_env() };
}

#[test]
fn from_env_unknown_provider_errors() {
    let _env = env_guard();
    unsafe {
        clear_mail_env();
        std::env::set_var("MAIL_PROVIDER", "carrier-pigeon");
    }

    let err = MailConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown MAIL_PROVIDER"));

    unsafe { clear_mail_env() };
}
