use crate::dns::record_mapper::{RecordMapper, RecordTypeMapper};
use docker_dns_application::use_cases::HandleDnsQueryUseCase;
use docker_dns_domain::{DnsQuery, DomainError, Question};
use hickory_proto::op::Header;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn to_query(request: &Request) -> DnsQuery {
        let questions = request
            .queries()
            .iter()
            .map(|query| {
                Question::new(
                    query.original().name().to_utf8(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                )
            })
            .collect();

        DnsQuery::new(request.header().id(), questions)
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let query = Self::to_query(request);
        let client_ip = request.src().ip();

        debug!(id = query.id, questions = query.questions.len(), client = %client_ip, "DNS query received");

        let reply = self.use_case.execute(&query).await;

        let mut answers: Vec<Record> = Vec::with_capacity(reply.answers.len());
        for answer in &reply.answers {
            match RecordMapper::to_hickory(answer) {
                Ok(record) => answers.push(record),
                Err(e) => warn!(record = %answer, error = %e, "Skipping unencodable answer"),
            }
        }

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = Header::response_from_request(request.header());
        let response = builder.build(
            header,
            answers.iter(),
            &[] as &[Record],
            &[] as &[Record],
            &[] as &[Record],
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                let failure = DomainError::ReplySendFailure(e.to_string());
                error!(client = %client_ip, error = %failure, "Reply not delivered");
                ResponseInfo::from(header)
            }
        }
    }
}
