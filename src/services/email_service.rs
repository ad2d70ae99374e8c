use aws_sdk_sesv2::Client as SesClient;

use crate::{
    error::{AppError, Result},
    models::{ContactRequest, Quote},
};

pub async fn send_quote_notification(
    ses_client: &SesClient,
    sender_email: &str,
    recipient: &str,
    quote: &Quote,
) -> Result<()> {
    let subject = format!("Nueva solicitud de cotización #{}", quote.id);

    let body = format!(
        "Nueva solicitud de cotización\n\n\
         Nombre: {}\n\
         Email: {}\n\
         Teléfono: {}\n\
         Empresa: {}\n\
         Producto de interés: {}\n\n\
         Mensaje:\n{}\n",
        quote.name,
        quote.email,
        quote.phone.as_deref().unwrap_or("-"),
        quote.company.as_deref().unwrap_or("-"),
        quote.product_interest.as_deref().unwrap_or("-"),
        quote.message.as_deref().unwrap_or("-"),
    );

    send_plain_email(ses_client, sender_email, recipient, &subject, &body).await
}

pub async fn send_contact_message(
    ses_client: &SesClient,
    sender_email: &str,
    recipient: &str,
    contact: &ContactRequest,
) -> Result<()> {
    let subject = format!("Mensaje de contacto de {}", contact.name);

    let body = format!(
        "Nuevo mensaje de contacto\n\n\
         Nombre: {}\n\
         Email: {}\n\n\
         Mensaje:\n{}\n",
        contact.name, contact.email, contact.message,
    );

    send_plain_email(ses_client, sender_email, recipient, &subject, &body).await
}

async fn send_plain_email(
    ses_client: &SesClient,
    sender_email: &str,
    recipient: &str,
    subject: &str,
    body: &str,
) -> Result<()> {
    let destination = aws_sdk_sesv2::types::Destination::builder()
        .to_addresses(recipient)
        .build();

    let subject = aws_sdk_sesv2::types::Content::builder()
        .data(subject)
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("No se pudo construir el asunto: {}", e)))?;

    let text_body = aws_sdk_sesv2::types::Content::builder()
        .data(body)
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("No se pudo construir el mensaje: {}", e)))?;

    let body = aws_sdk_sesv2::types::Body::builder().text(text_body).build();

    let message = aws_sdk_sesv2::types::Message::builder()
        .subject(subject)
        .body(body)
        .build();

    let content = aws_sdk_sesv2::types::EmailContent::builder()
        .simple(message)
        .build();

    ses_client
        .send_email()
        .from_email_address(sender_email)
        .destination(destination)
        .content(content)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to send email: {:?}", e);
            AppError::InternalError("No se pudo enviar el correo".to_string())
        })?;

    Ok(())
}
