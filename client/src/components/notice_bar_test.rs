use super::*;

#[test]
fn classes_distinguish_kinds() {
    assert_eq!(notice_class(NoticeKind::Success), "notice notice--success");
    assert_eq!(notice_class(NoticeKind::Error), "notice notice--error");
}

#[test]
fn errors_use_alert_role() {
    assert_eq!(notice_role(NoticeKind::Error), "alert");
    assert_eq!(notice_role(NoticeKind::Success), "status");
}
