// Prompt constants for SOW drafting.
// The twelve numbered section headers and their order are consumed downstream; keep them verbatim.

/// SOW drafting prompt template.
/// Replace: {platform}, {size}, {weeks}, {cost}, {complexity},
///          {sow_templates}, {engineers}, {pricing}, {document}
/// The complexity denominator stays at 12 even though 13 indicators are scored.
pub const SOW_PROMPT_TEMPLATE: &str = r#"You are an expert consultant specializing in cloud migrations and infrastructure deployments for AWS, Azure, and GCP. Based on the uploaded project requirements document, generate a comprehensive Statement of Work (SOW) in Markdown format.

UPLOADED PROJECT REQUIREMENTS:
{document}

ANALYSIS RESULTS:
- Preferred Cloud Platform: {platform}
- Project Size: {size}
- Estimated Timeline: {weeks} weeks
- Estimated Investment: {cost}
- Complexity Score: {complexity}/12

CONTEXT AND TEMPLATES:
{sow_templates}

AVAILABLE TEAM:
{engineers}

PRICING REFERENCE:
{pricing}

Generate a detailed, professional SOW specifically tailored for {platform} that includes:

## 1. EXECUTIVE SUMMARY
- Clear project overview and business objectives aligned with {platform} capabilities
- Expected outcomes and ROI quantification
- High-level timeline ({weeks} weeks) and investment ({cost})
- Strategic benefits of choosing {platform}

## 2. PROJECT SCOPE & OBJECTIVES
- Detailed technical requirements analysis
- {platform} platform selection rationale with specific service recommendations
- Architecture design principles following {platform} best practices
- Performance and scalability targets using {platform} metrics
- Security and compliance requirements specific to {platform}

## 3. {platform} SOLUTION ARCHITECTURE
- Detailed {platform} services selection and justification
- Specific {platform} architecture patterns and reference architectures
- Integration points using {platform} native services
- {platform} security services and compliance frameworks
- {platform} disaster recovery and backup strategies

## 4. {platform} METHODOLOGY & BEST PRACTICES
- {platform} Well-Architected Framework principles
- {platform} DevOps and Infrastructure as Code tools (CloudFormation/ARM/Terraform)
- {platform} security best practices and compliance guidelines
- Agile project management with {platform} cloud adoption methodology
- Risk mitigation using {platform} native monitoring and alerting

## 5. DETAILED DELIVERABLES
- Phase-by-phase breakdown with {platform}-specific milestones
- {platform} Infrastructure as Code templates and deployment scripts
- {platform} native documentation and operational runbooks
- {platform} training materials and certification paths
- {platform} cost optimization and governance frameworks

## 6. TEAM COMPOSITION & RESPONSIBILITIES
- Team structure with {platform}-certified professionals
- Specific {platform} skills and expertise requirements
- {platform} support escalation procedures
- Client team collaboration using {platform} collaboration tools

## 7. CUSTOMER REQUIREMENTS & RESPONSIBILITIES
- Pre-project {platform} account setup and access requirements
- {platform} permissions and IAM configuration needs
- Data preparation and migration readiness for {platform}
- Stakeholder availability for {platform} decision points
- {platform} compliance and security approval processes

## 8. PROJECT TIMELINE & MILESTONES
- Detailed {weeks}-week project phases optimized for {platform}
- {platform} service provisioning and configuration milestones
- Go/no-go decision points aligned with {platform} best practices
- {platform} testing and validation checkpoints

## 9. INVESTMENT & COMMERCIAL TERMS
- Detailed cost breakdown: {cost} professional services
- {platform} infrastructure cost estimates by service
- Team member allocation with {platform} expertise premiums
- {platform} licensing and support costs
- Payment schedule aligned with {platform} delivery milestones

## 10. {platform} RISK ASSESSMENT & MITIGATION
- {platform}-specific technical risks and mitigation strategies
- {platform} service limitations and workarounds
- {platform} cost management and budget controls
- {platform} security and compliance risks

## 11. SUCCESS CRITERIA & ACCEPTANCE
- {platform} performance benchmarks and KPIs
- {platform} cost optimization targets
- {platform} security compliance validation
- {platform} operational excellence metrics

## 12. POST-DEPLOYMENT {platform} SUPPORT
- {platform} operational support model and SLAs
- {platform} monitoring, alerting, and incident response
- {platform} cost optimization and right-sizing recommendations
- {platform} roadmap and future enhancement planning

Make the SOW comprehensive, professional, and specifically tailored to {platform} best practices. Include specific {platform} services, pricing models, and realistic timelines. Demonstrate deep expertise in {platform} technologies and provide actionable recommendations. Use proper Markdown formatting with clear headings and bullet points."#;
