use serde::Serialize;

pub const SUCCESS: &str = "成功";
pub const FAILURE: &str = "失败";

/// The unified response envelope. The legacy service emitted two envelope
/// shapes; every endpoint here returns this one, which is the superset the
/// client already tolerates.
#[derive(Serialize)]
pub struct Envelope<T> {
    #[serde(flatten)]
    pub base: EnvelopeBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

/// `code` / `success` / `msg` triple shared by every response, including the
/// specialized ones that attach sibling fields next to `result`.
#[derive(Serialize)]
pub struct EnvelopeBase {
    pub code: u16,
    pub success: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<&'static str>,
}

impl EnvelopeBase {
    pub fn ok() -> Self {
        Self {
            code: 200,
            success: SUCCESS,
            msg: None,
        }
    }

    pub fn ok_msg(msg: &'static str) -> Self {
        Self {
            code: 200,
            success: SUCCESS,
            msg: Some(msg),
        }
    }
}

impl<T> Envelope<T> {
    pub fn ok(result: T) -> Self {
        Self {
            base: EnvelopeBase::ok(),
            result: Some(result),
        }
    }

    pub fn ok_msg(msg: &'static str, result: T) -> Self {
        Self {
            base: EnvelopeBase::ok_msg(msg),
            result: Some(result),
        }
    }
}

impl Envelope<()> {
    pub fn msg_only(msg: &'static str) -> Self {
        Self {
            base: EnvelopeBase::ok_msg(msg),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let json = serde_json::to_value(Envelope::ok_msg("登录成功", vec![1, 2])).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["success"], "成功");
        assert_eq!(json["msg"], "登录成功");
        assert_eq!(json["result"], serde_json::json!([1, 2]));
    }

    #[test]
    fn result_and_msg_are_omitted_when_absent() {
        let json = serde_json::to_value(Envelope::msg_only("标记已读成功")).unwrap();
        assert!(json.get("result").is_none());

        let json = serde_json::to_value(Envelope::ok(7)).unwrap();
        assert!(json.get("msg").is_none());
        assert_eq!(json["result"], 7);
    }
}
