//! Sendbird error taxonomy.
//!
//! Every numeric code published at
//! <https://sendbird.com/docs/chat/platform-api/v3/error-codes> maps to exactly
//! one [`ApiErrorCode`], and every code belongs to exactly one
//! [`ErrorCategory`]. Codes that describe the same family of failures nest
//! under a parent code (see [`ApiErrorCode::parent`]).

use std::fmt;

/// Top-level class of an API error, keyed by HTTP status semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// HTTP 400 and the `4001xx`-`4009xx` codes.
    BadRequest,
    /// HTTP 403.
    Forbidden,
    /// HTTP 429 and code `500910`.
    TooManyRequests,
    /// HTTP 500 and the `5006xx`/`500901` codes.
    InternalServerError,
    /// HTTP 503.
    ServiceUnavailable,
    /// Anything the table and the status fallback do not recognise.
    Unknown,
}

impl ErrorCategory {
    /// Classify a bare HTTP status. Returns `None` for statuses that have no
    /// dedicated category.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(ErrorCategory::BadRequest),
            403 => Some(ErrorCategory::Forbidden),
            429 => Some(ErrorCategory::TooManyRequests),
            500 => Some(ErrorCategory::InternalServerError),
            503 => Some(ErrorCategory::ServiceUnavailable),
            _ => None,
        }
    }

    /// Short human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::BadRequest => "bad request",
            ErrorCategory::Forbidden => "forbidden",
            ErrorCategory::TooManyRequests => "too many requests",
            ErrorCategory::InternalServerError => "internal server error",
            ErrorCategory::ServiceUnavailable => "service unavailable",
            ErrorCategory::Unknown => "API error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A specific Sendbird sub-error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// Parent of the `400100`-`400104` codes. Has no code of its own.
    UnexpectedParameterType,
    UnexpectedParameterTypeString,
    UnexpectedParameterTypeNumber,
    UnexpectedParameterTypeList,
    UnexpectedParameterTypeJson,
    UnexpectedParameterTypeBoolean,
    MissingRequiredParameters,
    NegativeNumberNotAllowed,
    UnauthorizedRequest,
    ParameterValueLengthExceeded,
    InvalidValue,
    IncompatibleValues,
    ParameterValueOutOfRange,
    InvalidUrlOfResource,
    NotAllowedCharacter,
    ResourceNotFound,
    ResourceAlreadyExists,
    TooManyItemsInParameter,
    DeactivatedUserNotAccessible,
    UserNotFound,
    InvalidAccessToken,
    InvalidSessionKeyValue,
    ApplicationNotFound,
    UserIdLengthExceeded,
    PaidQuotaExceeded,
    DomainNotAllowed,
    InvalidApiToken,
    MissingSomeParameters,
    InvalidJsonRequestBody,
    InvalidRequestUrl,
    TooManyUserWebsocketConnections,
    TooManyApplicationWebsocketConnections,
    BlockedUserSendNotAllowed,
    BlockedUserInvitedNotAllowed,
    BlockedUserInviteNotAllowed,
    BannedUserEnterChannelNotAllowed,
    BannedUserEnterCustomChannelNotAllowed,
    Unacceptable,
    InvalidEndpoint,
    ApplicationNotAvailable,
    RateLimitExceeded,
    InternalErrorPushTokenNotRegistered,
    InternalErrorPushTokenNotUnregistered,
    InternalError,
    /// Temporary server failure. Published without a numeric code; assigned
    /// to any HTTP 503 whose code is not in the table.
    ServiceUnavailable,
}

impl ApiErrorCode {
    /// Every sub-error, in table order.
    pub const ALL: &'static [ApiErrorCode] = &[
        ApiErrorCode::UnexpectedParameterType,
        ApiErrorCode::UnexpectedParameterTypeString,
        ApiErrorCode::UnexpectedParameterTypeNumber,
        ApiErrorCode::UnexpectedParameterTypeList,
        ApiErrorCode::UnexpectedParameterTypeJson,
        ApiErrorCode::UnexpectedParameterTypeBoolean,
        ApiErrorCode::MissingRequiredParameters,
        ApiErrorCode::NegativeNumberNotAllowed,
        ApiErrorCode::UnauthorizedRequest,
        ApiErrorCode::ParameterValueLengthExceeded,
        ApiErrorCode::InvalidValue,
        ApiErrorCode::IncompatibleValues,
        ApiErrorCode::ParameterValueOutOfRange,
        ApiErrorCode::InvalidUrlOfResource,
        ApiErrorCode::NotAllowedCharacter,
        ApiErrorCode::ResourceNotFound,
        ApiErrorCode::ResourceAlreadyExists,
        ApiErrorCode::TooManyItemsInParameter,
        ApiErrorCode::DeactivatedUserNotAccessible,
        ApiErrorCode::UserNotFound,
        ApiErrorCode::InvalidAccessToken,
        ApiErrorCode::InvalidSessionKeyValue,
        ApiErrorCode::ApplicationNotFound,
        ApiErrorCode::UserIdLengthExceeded,
        ApiErrorCode::PaidQuotaExceeded,
        ApiErrorCode::DomainNotAllowed,
        ApiErrorCode::InvalidApiToken,
        ApiErrorCode::MissingSomeParameters,
        ApiErrorCode::InvalidJsonRequestBody,
        ApiErrorCode::InvalidRequestUrl,
        ApiErrorCode::TooManyUserWebsocketConnections,
        ApiErrorCode::TooManyApplicationWebsocketConnections,
        ApiErrorCode::BlockedUserSendNotAllowed,
        ApiErrorCode::BlockedUserInvitedNotAllowed,
        ApiErrorCode::BlockedUserInviteNotAllowed,
        ApiErrorCode::BannedUserEnterChannelNotAllowed,
        ApiErrorCode::BannedUserEnterCustomChannelNotAllowed,
        ApiErrorCode::Unacceptable,
        ApiErrorCode::InvalidEndpoint,
        ApiErrorCode::ApplicationNotAvailable,
        ApiErrorCode::RateLimitExceeded,
        ApiErrorCode::InternalErrorPushTokenNotRegistered,
        ApiErrorCode::InternalErrorPushTokenNotUnregistered,
        ApiErrorCode::InternalError,
        ApiErrorCode::ServiceUnavailable,
    ];

    /// Look up a sub-error by its numeric Sendbird code.
    pub fn from_code(code: i64) -> Option<Self> {
        let found = match code {
            400100 => ApiErrorCode::UnexpectedParameterTypeString,
            400101 => ApiErrorCode::UnexpectedParameterTypeNumber,
            400102 => ApiErrorCode::UnexpectedParameterTypeList,
            400103 => ApiErrorCode::UnexpectedParameterTypeJson,
            400104 => ApiErrorCode::UnexpectedParameterTypeBoolean,
            400105 => ApiErrorCode::MissingRequiredParameters,
            400106 => ApiErrorCode::NegativeNumberNotAllowed,
            400108 => ApiErrorCode::UnauthorizedRequest,
            400110 => ApiErrorCode::ParameterValueLengthExceeded,
            400111 => ApiErrorCode::InvalidValue,
            400112 => ApiErrorCode::IncompatibleValues,
            400113 => ApiErrorCode::ParameterValueOutOfRange,
            400114 => ApiErrorCode::InvalidUrlOfResource,
            400151 => ApiErrorCode::NotAllowedCharacter,
            400201 => ApiErrorCode::ResourceNotFound,
            400202 => ApiErrorCode::ResourceAlreadyExists,
            400203 => ApiErrorCode::TooManyItemsInParameter,
            400300 => ApiErrorCode::DeactivatedUserNotAccessible,
            400301 => ApiErrorCode::UserNotFound,
            400302 => ApiErrorCode::InvalidAccessToken,
            400303 => ApiErrorCode::InvalidSessionKeyValue,
            400304 => ApiErrorCode::ApplicationNotFound,
            400305 => ApiErrorCode::UserIdLengthExceeded,
            400306 => ApiErrorCode::PaidQuotaExceeded,
            400307 => ApiErrorCode::DomainNotAllowed,
            400401 => ApiErrorCode::InvalidApiToken,
            400402 => ApiErrorCode::MissingSomeParameters,
            400403 => ApiErrorCode::InvalidJsonRequestBody,
            400404 => ApiErrorCode::InvalidRequestUrl,
            400500 => ApiErrorCode::TooManyUserWebsocketConnections,
            400501 => ApiErrorCode::TooManyApplicationWebsocketConnections,
            400700 => ApiErrorCode::BlockedUserSendNotAllowed,
            400701 => ApiErrorCode::BlockedUserInvitedNotAllowed,
            400702 => ApiErrorCode::BlockedUserInviteNotAllowed,
            400750 => ApiErrorCode::BannedUserEnterChannelNotAllowed,
            400751 => ApiErrorCode::BannedUserEnterCustomChannelNotAllowed,
            400920 => ApiErrorCode::Unacceptable,
            400930 => ApiErrorCode::InvalidEndpoint,
            403100 => ApiErrorCode::ApplicationNotAvailable,
            500601 => ApiErrorCode::InternalErrorPushTokenNotRegistered,
            500602 => ApiErrorCode::InternalErrorPushTokenNotUnregistered,
            500901 => ApiErrorCode::InternalError,
            500910 => ApiErrorCode::RateLimitExceeded,
            _ => return None,
        };
        Some(found)
    }

    /// The numeric Sendbird code, if the sub-error has one.
    pub fn code(&self) -> Option<i64> {
        let code = match self {
            ApiErrorCode::UnexpectedParameterType | ApiErrorCode::ServiceUnavailable => {
                return None
            }
            ApiErrorCode::UnexpectedParameterTypeString => 400100,
            ApiErrorCode::UnexpectedParameterTypeNumber => 400101,
            ApiErrorCode::UnexpectedParameterTypeList => 400102,
            ApiErrorCode::UnexpectedParameterTypeJson => 400103,
            ApiErrorCode::UnexpectedParameterTypeBoolean => 400104,
            ApiErrorCode::MissingRequiredParameters => 400105,
            ApiErrorCode::NegativeNumberNotAllowed => 400106,
            ApiErrorCode::UnauthorizedRequest => 400108,
            ApiErrorCode::ParameterValueLengthExceeded => 400110,
            ApiErrorCode::InvalidValue => 400111,
            ApiErrorCode::IncompatibleValues => 400112,
            ApiErrorCode::ParameterValueOutOfRange => 400113,
            ApiErrorCode::InvalidUrlOfResource => 400114,
            ApiErrorCode::NotAllowedCharacter => 400151,
            ApiErrorCode::ResourceNotFound => 400201,
            ApiErrorCode::ResourceAlreadyExists => 400202,
            ApiErrorCode::TooManyItemsInParameter => 400203,
            ApiErrorCode::DeactivatedUserNotAccessible => 400300,
            ApiErrorCode::UserNotFound => 400301,
            ApiErrorCode::InvalidAccessToken => 400302,
            ApiErrorCode::InvalidSessionKeyValue => 400303,
            ApiErrorCode::ApplicationNotFound => 400304,
            ApiErrorCode::UserIdLengthExceeded => 400305,
            ApiErrorCode::PaidQuotaExceeded => 400306,
            ApiErrorCode::DomainNotAllowed => 400307,
            ApiErrorCode::InvalidApiToken => 400401,
            ApiErrorCode::MissingSomeParameters => 400402,
            ApiErrorCode::InvalidJsonRequestBody => 400403,
            ApiErrorCode::InvalidRequestUrl => 400404,
            ApiErrorCode::TooManyUserWebsocketConnections => 400500,
            ApiErrorCode::TooManyApplicationWebsocketConnections => 400501,
            ApiErrorCode::BlockedUserSendNotAllowed => 400700,
            ApiErrorCode::BlockedUserInvitedNotAllowed => 400701,
            ApiErrorCode::BlockedUserInviteNotAllowed => 400702,
            ApiErrorCode::BannedUserEnterChannelNotAllowed => 400750,
            ApiErrorCode::BannedUserEnterCustomChannelNotAllowed => 400751,
            ApiErrorCode::Unacceptable => 400920,
            ApiErrorCode::InvalidEndpoint => 400930,
            ApiErrorCode::ApplicationNotAvailable => 403100,
            ApiErrorCode::RateLimitExceeded => 500910,
            ApiErrorCode::InternalErrorPushTokenNotRegistered => 500601,
            ApiErrorCode::InternalErrorPushTokenNotUnregistered => 500602,
            ApiErrorCode::InternalError => 500901,
        };
        Some(code)
    }

    /// The category this sub-error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiErrorCode::ApplicationNotAvailable => ErrorCategory::Forbidden,
            ApiErrorCode::RateLimitExceeded => ErrorCategory::TooManyRequests,
            ApiErrorCode::InternalErrorPushTokenNotRegistered
            | ApiErrorCode::InternalErrorPushTokenNotUnregistered
            | ApiErrorCode::InternalError => ErrorCategory::InternalServerError,
            ApiErrorCode::ServiceUnavailable => ErrorCategory::ServiceUnavailable,
            _ => ErrorCategory::BadRequest,
        }
    }

    /// The enclosing sub-error, for codes that refine a broader one.
    pub fn parent(&self) -> Option<ApiErrorCode> {
        match self {
            ApiErrorCode::UnexpectedParameterTypeString
            | ApiErrorCode::UnexpectedParameterTypeNumber
            | ApiErrorCode::UnexpectedParameterTypeList
            | ApiErrorCode::UnexpectedParameterTypeJson
            | ApiErrorCode::UnexpectedParameterTypeBoolean => {
                Some(ApiErrorCode::UnexpectedParameterType)
            }
            _ => None,
        }
    }

    /// Returns true if `self` is `other` or nested anywhere under it.
    pub fn is_within(&self, other: ApiErrorCode) -> bool {
        let mut current = Some(*self);
        while let Some(code) = current {
            if code == other {
                return true;
            }
            current = code.parent();
        }
        false
    }

    /// Description as published in the Sendbird error code reference.
    pub fn description(&self) -> &'static str {
        match self {
            ApiErrorCode::UnexpectedParameterType => {
                "the request specifies one or more parameters in an unexpected data type"
            }
            ApiErrorCode::UnexpectedParameterTypeString => {
                "the data type of the parameters should be string"
            }
            ApiErrorCode::UnexpectedParameterTypeNumber => {
                "the data type of the parameters should be number"
            }
            ApiErrorCode::UnexpectedParameterTypeList => {
                "the data type of the parameters should be list"
            }
            ApiErrorCode::UnexpectedParameterTypeJson => {
                "the data type of the parameters should be JSON"
            }
            ApiErrorCode::UnexpectedParameterTypeBoolean => {
                "the data type of the parameters should be boolean"
            }
            ApiErrorCode::MissingRequiredParameters => {
                "the request is missing one or more required parameters"
            }
            ApiErrorCode::NegativeNumberNotAllowed => {
                "the request specifies a negative number, it should specify a positive number"
            }
            ApiErrorCode::UnauthorizedRequest => {
                "the request isn't authorized and can't access the requested resource"
            }
            ApiErrorCode::ParameterValueLengthExceeded => {
                "the length of the parameter value is too long"
            }
            ApiErrorCode::InvalidValue => "the request specifies an invalid value",
            ApiErrorCode::IncompatibleValues => {
                "two parameters of the request, which should have unique values, specify the same value"
            }
            ApiErrorCode::ParameterValueOutOfRange => {
                "the request specifies one or more parameters outside the accepted value range"
            }
            ApiErrorCode::InvalidUrlOfResource => {
                "the resource identified with the URL in the request can't be found"
            }
            ApiErrorCode::NotAllowedCharacter => {
                "the request specifies an unacceptable value containing special character, empty string, or white space"
            }
            ApiErrorCode::ResourceNotFound => {
                "the resource identified with the request's resourceId parameter can't be found"
            }
            ApiErrorCode::ResourceAlreadyExists => {
                "the resource identified with the request's resourceId parameter already exists"
            }
            ApiErrorCode::TooManyItemsInParameter => {
                "the parameter specifies more items than allowed"
            }
            ApiErrorCode::DeactivatedUserNotAccessible => {
                "the request can't retrieve the deactivated user data"
            }
            ApiErrorCode::UserNotFound => {
                "the user identified with the request's userId parameter can't be found"
            }
            ApiErrorCode::InvalidAccessToken => {
                "the access token provided for the request specifies an invalid value"
            }
            ApiErrorCode::InvalidSessionKeyValue => {
                "the session key provided for the request specifies an invalid value"
            }
            ApiErrorCode::ApplicationNotFound => {
                "the application identified with the request can't be found"
            }
            ApiErrorCode::UserIdLengthExceeded => {
                "the length of the userId parameter value is too long"
            }
            ApiErrorCode::PaidQuotaExceeded => {
                "the request can't be completed because you have exceeded your plan's paid quota"
            }
            ApiErrorCode::DomainNotAllowed => {
                "the request can't be completed because it came from a restricted domain"
            }
            ApiErrorCode::InvalidApiToken => {
                "the API token provided for the request specifies an invalid value"
            }
            ApiErrorCode::MissingSomeParameters => {
                "the request is missing one or more necessary parameters"
            }
            ApiErrorCode::InvalidJsonRequestBody => "the request body is an invalid JSON",
            ApiErrorCode::InvalidRequestUrl => {
                "the request specifies an invalid HTTP request URL that can't be accessed"
            }
            ApiErrorCode::TooManyUserWebsocketConnections => {
                "the number of the user's websocket connections exceeds the allowed amount"
            }
            ApiErrorCode::TooManyApplicationWebsocketConnections => {
                "the number of the application's websocket connections exceeds the allowed amount"
            }
            ApiErrorCode::BlockedUserSendNotAllowed => {
                "the request can't be completed due to being blocked by the recipient or deactivated"
            }
            ApiErrorCode::BlockedUserInvitedNotAllowed => {
                "the request can't be completed because the blocking user is trying to invite the blocked user to a channel"
            }
            ApiErrorCode::BlockedUserInviteNotAllowed => {
                "a blocked user is trying to invite the user who blocked them to a channel"
            }
            ApiErrorCode::BannedUserEnterChannelNotAllowed => {
                "the request can't be completed because the user is trying to enter a channel that they are banned from"
            }
            ApiErrorCode::BannedUserEnterCustomChannelNotAllowed => {
                "the request can't be completed because the user is trying to enter a custom type channel that they are banned from"
            }
            ApiErrorCode::Unacceptable => {
                "the request is unacceptable because the combination of parameter values is invalid"
            }
            ApiErrorCode::InvalidEndpoint => {
                "the request failed because it is sent to an invalid endpoint"
            }
            ApiErrorCode::ApplicationNotAvailable => {
                "the application identified with the request isn't available"
            }
            ApiErrorCode::RateLimitExceeded => {
                "the request can't be completed because you have exceeded your rate limits"
            }
            ApiErrorCode::InternalErrorPushTokenNotRegistered => {
                "the server encounters an error while trying to register the user's push token"
            }
            ApiErrorCode::InternalErrorPushTokenNotUnregistered => {
                "the server encounters an error while trying to unregister the user's push token"
            }
            ApiErrorCode::InternalError => {
                "the server encounters an unexpected exception while trying to process the request"
            }
            ApiErrorCode::ServiceUnavailable => {
                "the request failed due to a temporary failure of the server"
            }
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent() {
            Some(parent) => write!(f, "{}: {}", parent, self.description()),
            None => write!(f, "{}: {}", self.category(), self.description()),
        }
    }
}
