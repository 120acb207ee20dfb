use crate::{Error, MissingServer, Options, Server, report, resolve_server, resolve_services, resolve_services_with};

const DUMP: &str = r#"#NS12.1 Build 55.18
set ns config -IPAddress 192.168.1.10 -netmask 255.255.255.0
add server S1 10.0.0.1
add server "Name One" 10.0.0.2
add server S2 10.0.0.3 "primary DC"
add server S1 172.16.0.1
add service "Svc A" S1 HTTP 80 -gslb NONE -maxClient 0 -usip YES -useproxyport NO
add service svc_b "Name One" SSL 443 -usip NO
add service svc_c S2 TCP 8080 -comment "legacy app" -usip YES
add service "Svc D" "Name One" DNS 53
add serviceGroup sg_web HTTP -maxClient 0 -usip YES
bind lb vserver vs_web "Svc A"
"#;

fn server(name: &str, address: &str, line: usize) -> Server {
    Server { name: name.to_string(), address: address.to_string(), line }
}

#[test]
fn resolves_every_service_in_file_order() {
    let services = resolve_services(DUMP).unwrap();

    // (name, server, protocol, port, flag)
    let expected: Vec<(&str, Server, &str, &str, Option<&str>)> = vec![
        ("Svc A", server("S1", "10.0.0.1", 3), "HTTP", "80", Some("YES")),
        ("svc_b", server("Name One", "10.0.0.2", 4), "SSL", "443", Some("NO")),
        ("svc_c", server("S2", "10.0.0.3", 5), "TCP", "8080", Some("YES")),
        ("Svc D", server("Name One", "10.0.0.2", 4), "DNS", "53", None),
    ];

    assert_eq!(services.len(), expected.len());
    for (svc, (name, srv, protocol, port, flag)) in services.iter().zip(expected) {
        assert_eq!(svc.name, name);
        assert_eq!(svc.server, srv, "server of {name}");
        assert_eq!(svc.protocol, protocol);
        assert_eq!(svc.port, port);
        assert_eq!(svc.flag.as_deref(), flag, "flag of {name}");
    }
    assert_eq!(services.iter().map(|s| s.line).collect::<Vec<_>>(), vec![7, 8, 9, 10]);
}

#[test]
fn report_keeps_only_sentinel_matches_in_order() {
    let services = resolve_services(DUMP).unwrap();
    let lines = report(&services, "YES");
    assert_eq!(lines, vec!["Svc A S1 10.0.0.1", "svc_c S2 10.0.0.3"]);
    assert_eq!(lines.len(), services.iter().filter(|s| s.flag_is("YES")).count());

    assert_eq!(report(&services, "NO"), vec!["svc_b Name One 10.0.0.2"]);
    assert!(report(&services, "yes").is_empty());
}

#[test]
fn service_without_flag_is_not_reported() {
    let text = "add server S1 10.0.0.1\nadd service \"Svc A\" S1 HTTP 80\n";
    let services = resolve_services(text).unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].flag, None);
    assert!(report(&services, "YES").is_empty());
}

#[test]
fn undefined_server_aborts_the_whole_run() {
    let text = "add server S1 10.0.0.1\n\
                add service ok S1 HTTP 80 -usip YES\n\
                add service broken S9 HTTP 80 -usip YES\n";
    let err = resolve_services(text).unwrap_err();
    assert!(matches!(err, Error::ServerNotFound { ref name, line: Some(3) } if name == "S9"));
    assert_eq!(err.to_string(), "line 3: no server named \"S9\"");
}

#[test]
fn undefined_server_can_be_skipped() {
    let text = "add server S1 10.0.0.1\n\
                add service broken S9 HTTP 80 -usip YES\n\
                add service ok S1 HTTP 80 -usip YES\n";
    let options = Options { missing_server: MissingServer::Skip, ..Options::default() };
    let services = resolve_services_with(text, &options).unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].name, "ok");
}

#[test]
fn skipping_does_not_hide_malformed_directives() {
    let text = "add service broken S9 HTTP\n";
    let options = Options { missing_server: MissingServer::Skip, ..Options::default() };
    assert!(matches!(resolve_services_with(text, &options), Err(Error::MalformedDirective { line: 1, .. })));
}

#[test]
fn malformed_server_surfaces_through_services() {
    let text = "add server S1\nadd service svc S1 HTTP 80\n";
    assert!(matches!(resolve_services(text), Err(Error::MalformedDirective { line: 1, .. })));
}

#[test]
fn crlf_dump_matches_lf_dump() {
    let crlf = DUMP.replace('\n', "\r\n");
    assert_eq!(resolve_services(&crlf).unwrap(), resolve_services(DUMP).unwrap());
}

#[test]
fn parsing_twice_is_identical() {
    assert_eq!(resolve_services(DUMP).unwrap(), resolve_services(DUMP).unwrap());
}

#[test]
fn duplicate_server_names_resolve_to_first_definition() {
    assert_eq!(resolve_server(DUMP, "S1").unwrap().address, "10.0.0.1");
    let services = resolve_services(DUMP).unwrap();
    assert!(services.iter().filter(|s| s.server.name == "S1").all(|s| s.server.address == "10.0.0.1"));
}

#[test]
fn dump_without_services_is_empty() {
    assert!(resolve_services("add server S1 10.0.0.1\n").unwrap().is_empty());
    assert!(resolve_services("").unwrap().is_empty());
}
