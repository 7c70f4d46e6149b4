//! Builds proxy records from a link and from a dictionary, then prints
//! their canonical forms.

use proxy_model::{MemoryStore, ProxyDictionary, ProxyInput, ProxyRegistry, ProxyType};

fn main() {
    let mut store = MemoryStore::new();
    store.add_rule_set("Streaming");
    let registry = ProxyRegistry::new(store);

    // Link form; the name travels next to the link
    let link = ProxyInput::uri("ss://aes-256-cfb-auth:secret@1.2.3.4:8388", "Tokyo");
    match registry.add(&link) {
        Ok(proxy) => println!("{} -> {} (ota: {})", proxy, proxy.uri(), proxy.one_time_auth),
        Err(e) => println!("link rejected: {}", e),
    }

    // Dictionary form, with a name that clashes with a rule set
    let dict: ProxyDictionary = [
        ("name", "Streaming"),
        ("host", "10.0.0.1"),
        ("type", "socks5"),
        ("port", "1080"),
        ("encryption", "none"),
        ("password", "pw"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    match registry.add(&ProxyInput::from(dict)) {
        Ok(proxy) => {
            assert_eq!(proxy.kind, ProxyType::Socks5);
            println!("stored as '{}' (type {})", proxy, proxy.kind);
        }
        Err(e) => println!("dictionary rejected: {}", e),
    }

    // Same name again
    if let Err(e) = registry.add(&ProxyInput::uri("ss://rc4:pw@5.6.7.8:443", "Tokyo")) {
        println!("duplicate rejected: {}", e);
    }

    println!("{} proxies stored", registry.len());
}
