//! Outgoing email bodies.
use crate::application::ports::mailer::OutgoingEmail;

pub struct ListingInquiry<'a> {
    pub owner_email: &'a str,
    pub owner_first_name: &'a str,
    pub listing_title: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

pub struct ContactSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub message: &'a str,
}

pub fn activation_email(to: &str, activation_url: &str) -> OutgoingEmail {
    let url = escape_html(activation_url);
    OutgoingEmail {
        to: to.to_string(),
        reply_to: None,
        subject: "Activate Your EasyRent Account".into(),
        text_body: format!(
            "Welcome to EasyRent!\n\nActivate your account within 24 hours by visiting:\n{activation_url}\n"
        ),
        html_body: Some(format!(
            "<p>Welcome to EasyRent!</p>\
             <p>Activate your account within 24 hours:</p>\
             <p><a href=\"{url}\">{url}</a></p>"
        )),
    }
}

pub fn listing_inquiry_email(inquiry: &ListingInquiry<'_>) -> OutgoingEmail {
    OutgoingEmail {
        to: inquiry.owner_email.to_string(),
        reply_to: Some(inquiry.email.to_string()),
        subject: format!(
            "Message from {} {} - Interested in Your Flat",
            inquiry.first_name, inquiry.last_name
        ),
        text_body: inquiry.message.to_string(),
        html_body: Some(format!(
            "<p>Hello {owner},</p>\
             <p>{first} {last} is interested in your flat <strong>{title}</strong>.</p>\
             <ul><li>Email: {email}</li><li>Phone: {phone}</li></ul>\
             <p>{message}</p>",
            owner = escape_html(inquiry.owner_first_name),
            first = escape_html(inquiry.first_name),
            last = escape_html(inquiry.last_name),
            title = escape_html(inquiry.listing_title),
            email = escape_html(inquiry.email),
            phone = escape_html(inquiry.phone),
            message = escape_html(inquiry.message),
        )),
    }
}

pub fn contact_form_email(inbox: &str, submission: &ContactSubmission<'_>) -> OutgoingEmail {
    OutgoingEmail {
        to: inbox.to_string(),
        reply_to: Some(submission.email.to_string()),
        subject: format!("New Contact Message from {}", submission.name),
        text_body: format!(
            "Name: {}\nEmail: {}\nPhone: {}\nAddress: {}\n\n{}\n",
            submission.name,
            submission.email,
            submission.phone,
            submission.address,
            submission.message
        ),
        html_body: Some(format!(
            "<ul><li>Name: {}</li><li>Email: {}</li><li>Phone: {}</li><li>Address: {}</li></ul>\
             <p>{}</p>",
            escape_html(submission.name),
            escape_html(submission.email),
            escape_html(submission.phone),
            escape_html(submission.address),
            escape_html(submission.message),
        )),
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
