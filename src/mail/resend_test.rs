use super::*;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        phone: None,
        service: None,
        message: "Line one\nLine two".into(),
    }
}

#[test]
fn template_fills_every_placeholder() {
    let html = render_contact_template(&submission());
    assert!(!html.contains("{{"));
    assert!(html.contains("jo@example.com"));
    assert!(html.contains("Not provided"));
    assert!(html.contains("No preference"));
    assert!(html.contains("Line one\nLine two"));
}

#[test]
fn template_escapes_visitor_input() {
    let mut req = submission();
    req.name = "<script>alert('x')</script>".into();
    req.message = "Tom & \"Jerry\"".into();
    let html = render_contact_template(&req);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
}

#[test]
fn escape_leaves_plain_text_alone() {
    assert_eq!(escape_html("Robotic Surgery"), "Robotic Surgery");
    assert_eq!(escape_html(""), "");
}
