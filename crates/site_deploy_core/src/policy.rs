use serde_json::json;

pub const POLICY_VERSION: &str = "2012-10-17";

/// Bucket policy letting anyone read (but not list or write) the site's objects.
pub fn public_read_policy(bucket: &str) -> String {
    json!({
        "Version": POLICY_VERSION,
        "Statement": [
            {
                "Sid": "PublicReadGetObject",
                "Effect": "Allow",
                "Principal": "*",
                "Action": "s3:GetObject",
                "Resource": format!("arn:aws:s3:::{bucket}/*"),
            }
        ]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn grants_get_object_on_every_key() {
        let policy: Value =
            serde_json::from_str(&public_read_policy("demo-site")).expect("valid json");

        assert_eq!(policy["Version"], POLICY_VERSION);
        let statement = &policy["Statement"][0];
        assert_eq!(statement["Sid"], "PublicReadGetObject");
        assert_eq!(statement["Effect"], "Allow");
        assert_eq!(statement["Principal"], "*");
        assert_eq!(statement["Action"], "s3:GetObject");
        assert_eq!(statement["Resource"], "arn:aws:s3:::demo-site/*");
    }
}
