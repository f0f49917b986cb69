use urlencoding::encode;

/// One proposal request as entered in the contact form. Built fresh on every
/// submit and handed straight to the mail client, never stored.
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl Enquiry {
    pub fn subject(&self) -> String {
        let from = if self.name.is_empty() {
            "Website Visitor"
        } else {
            self.name.as_str()
        };
        format!("AXYCAD — Proposal Request from {}", from)
    }

    /// Plain-text body sent to the office. Newlines typed into the scope
    /// field stay where they are.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\n\nScope:\n{}",
            self.name, self.email, self.company, self.message
        )
    }

    /// Recipient addresses stay as-is: commas are the separator the mailto
    /// scheme expects. Only the query values get percent-encoded.
    pub fn mailto(&self, recipients: &[&str]) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipients.join(","),
            encode(&self.subject()),
            encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RECIPIENTS;

    fn enquiry(name: &str, email: &str, company: &str, message: &str) -> Enquiry {
        Enquiry {
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn subject_uses_name_when_present() {
        let e = enquiry("Jane Doe", "jane@x.com", "", "");
        assert_eq!(e.subject(), "AXYCAD — Proposal Request from Jane Doe");
    }

    #[test]
    fn subject_falls_back_for_anonymous_visitor() {
        let e = enquiry("", "a@b.com", "", "");
        assert_eq!(e.subject(), "AXYCAD — Proposal Request from Website Visitor");
    }

    #[test]
    fn body_lays_out_fields_then_scope() {
        let e = enquiry("Jane Doe", "jane@x.com", "Acme", "Need a quote");
        assert_eq!(
            e.body(),
            "Name: Jane Doe\nEmail: jane@x.com\nCompany: Acme\n\nScope:\nNeed a quote"
        );
    }

    #[test]
    fn recipient_segment_is_fixed_regardless_of_input() {
        let a = enquiry("Jane Doe", "jane@x.com", "Acme", "Need a quote");
        let b = enquiry("", "", "", "");
        for e in [a, b] {
            let uri = e.mailto(&RECIPIENTS);
            let addresses = uri
                .strip_prefix("mailto:")
                .and_then(|rest| rest.split('?').next())
                .unwrap();
            assert_eq!(addresses, "office@axycad.co.uk,darius@axycad.co.uk");
        }
    }

    #[test]
    fn encoded_query_values_decode_back_exactly() {
        let e = enquiry("Jane Doe", "jane@x.com", "Acme & Sons", "Need a quote?\nBy Friday.");
        let uri = e.mailto(&RECIPIENTS);
        let query = uri.split('?').nth(1).unwrap();
        let mut subject = None;
        let mut body = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap();
            match key {
                "subject" => subject = Some(urlencoding::decode(value).unwrap().into_owned()),
                "body" => body = Some(urlencoding::decode(value).unwrap().into_owned()),
                _ => {}
            }
        }
        assert_eq!(subject.unwrap(), e.subject());
        assert_eq!(body.unwrap(), e.body());
    }

    #[test]
    fn embedded_newlines_survive_the_round_trip() {
        let e = enquiry("Jane Doe", "jane@x.com", "", "Line1\nLine2");
        let uri = e.mailto(&RECIPIENTS);
        let encoded_body = uri.split("&body=").nth(1).unwrap();
        let decoded = urlencoding::decode(encoded_body).unwrap();
        assert!(decoded.ends_with("Scope:\nLine1\nLine2"));
    }

    #[test]
    fn raw_query_contains_no_literal_spaces_or_newlines() {
        let e = enquiry("Jane Doe", "jane@x.com", "Acme", "Need a quote");
        let uri = e.mailto(&RECIPIENTS);
        let query = uri.split('?').nth(1).unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
    }
}
