use bean_macros::Bean;
use context_abstractions::Bean as _;

#[derive(Default, Bean)]
struct HttpClient;

#[derive(Default, Bean)]
struct HTTPClient;

fn main() {
    assert_eq!(HttpClient::bean_definition().bean_name(), "httpClient");
    assert_eq!(HTTPClient::bean_definition().bean_name(), "hTTPClient");
}
