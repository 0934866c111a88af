use anyhow::Context as _;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::config::MailConfig;
use crate::domain::repository::MailerPort;
use crate::domain::types::{ClientIntake, Message};

/// SMTP adapter for notification mail sent to the office inbox.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    contact_inbox: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let credentials = Credentials::new(config.smtp_user.clone(), config.smtp_pass.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .context("connect to SMTP relay")?
            .port(config.smtp_port)
            .credentials(credentials)
            .pool_config(PoolConfig::default())
            .build();
        let from = config
            .smtp_from
            .parse()
            .context("invalid SMTP_FROM address")?;
        let contact_inbox = config
            .contact_email
            .parse()
            .context("invalid CONTACT_EMAIL address")?;
        Ok(Self {
            mailer,
            from,
            contact_inbox,
        })
    }

    async fn send_html(&self, subject: &str, body: String) -> anyhow::Result<()> {
        let email = lettre::Message::builder()
            .from(self.from.clone())
            .to(self.contact_inbox.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .context("build notification mail")?;
        self.mailer
            .send(email)
            .await
            .context("send notification mail")?;
        Ok(())
    }
}

impl MailerPort for SmtpMailer {
    async fn send_contact_mail(&self, message: &Message) -> anyhow::Result<()> {
        let body = format!(
            "<h2>Yeni İletişim Formu Mesajı</h2>\
             <p><strong>Ad Soyad:</strong> {} {}</p>\
             <p><strong>E-posta:</strong> {}</p>\
             <p><strong>Telefon:</strong> {}</p>\
             <p><strong>Mesaj:</strong> {}</p>\
             <hr>\
             <p><em>Bu mesaj web sitesi iletişim formundan gönderilmiştir.</em></p>",
            message.name, message.surname, message.email, message.phone, message.message,
        );
        self.send_html("Yeni İletişim Formu Mesajı", body).await
    }

    async fn send_client_intake_mail(&self, intake: &ClientIntake) -> anyhow::Result<()> {
        let body = format!(
            "<h2>Yeni Müşteri Kaydı</h2>\
             <p><strong>Ad Soyad:</strong> {}</p>\
             <p><strong>Telefon:</strong> {}</p>\
             <p><strong>Açıklama:</strong> {}</p>\
             <hr>\
             <p><em>Bu mesaj müşteri kayıt formundan gönderilmiştir.</em></p>",
            intake.name, intake.phone, intake.description,
        );
        self.send_html("Yeni Müşteri Kaydı", body).await
    }
}
